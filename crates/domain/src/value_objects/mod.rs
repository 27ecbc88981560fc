//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod polygon;
mod travel_profile;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use polygon::Polygon;
pub use travel_profile::TravelProfile;
