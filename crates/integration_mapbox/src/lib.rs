//! Mapbox integration for giso
//!
//! Client for the [Mapbox](https://docs.mapbox.com/) geocoding and isochrone
//! APIs. Upstream speaks GeoJSON `[longitude, latitude]`; everything this
//! crate returns is latitude-first.
//!
//! # Architecture
//!
//! [`MapboxClient`] implements both [`GeocodingClient`] and [`IsochroneClient`].
//! It reads its access token from a [`TokenStore`], a shared handle that is
//! set once and then used by every request. [`IsochroneBatch`] layers the
//! multi-duration operation on top of any [`IsochroneClient`].
//!
//! Requests are never retried or cached. The batch runs its requests
//! sequentially and drops (with a `warn!`) the durations that fail.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use domain::TravelProfile;
//! use integration_mapbox::{
//!     GeocodingClient, IsochroneBatch, IsochroneClient, MapboxClient, MapboxConfig,
//! };
//!
//! let client = Arc::new(MapboxClient::new(&MapboxConfig::default())?);
//! client.set_token("pk.your-token");
//!
//! let origin = client.geocode("buckingham palace, london, uk").await?;
//! let profile = client.config().default_profile;
//! let ten_minutes = client.isochrone(origin, 10, profile).await?;
//!
//! let batch = IsochroneBatch::new(client.clone());
//! let rings = batch.isochrones(origin, &[5, 20, 10], TravelProfile::Walking).await;
//! ```

mod batch;
mod client;
mod config;
mod error;
mod geocoding;
mod isochrone;
mod models;
mod token;
mod urlencoding;

pub use batch::IsochroneBatch;
pub use client::MapboxClient;
pub use config::MapboxConfig;
pub use error::MapboxError;
pub use geocoding::GeocodingClient;
pub use isochrone::IsochroneClient;
pub use token::TokenStore;
