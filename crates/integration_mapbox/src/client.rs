//! Mapbox HTTP client
//!
//! [`MapboxClient`] owns the HTTP connection pool, the configuration and a
//! handle to the shared [`TokenStore`]. The geocoding and isochrone
//! operations live in their own modules and go through [`MapboxClient::get_json`].

use std::time::Duration;

use reqwest::Client;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::MapboxConfig;
use crate::error::MapboxError;
use crate::models::ErrorBody;
use crate::token::TokenStore;

/// Client for the Mapbox geocoding and isochrone APIs
#[derive(Debug, Clone)]
pub struct MapboxClient {
    client: Client,
    config: MapboxConfig,
    tokens: TokenStore,
}

impl MapboxClient {
    /// Create a new client with its own token store
    ///
    /// The store is seeded with `config.access_token` when present.
    ///
    /// # Errors
    ///
    /// Returns [`MapboxError::Configuration`] if `config` fails validation,
    /// or [`MapboxError::Network`] if the HTTP client cannot be initialized.
    pub fn new(config: &MapboxConfig) -> Result<Self, MapboxError> {
        Self::with_token_store(config, TokenStore::new())
    }

    /// Create a new client that reads its token from `tokens`
    ///
    /// If `config.access_token` is set it is written into `tokens`.
    ///
    /// # Errors
    ///
    /// Returns [`MapboxError::Configuration`] if `config` fails validation,
    /// or [`MapboxError::Network`] if the HTTP client cannot be initialized.
    pub fn with_token_store(
        config: &MapboxConfig,
        tokens: TokenStore,
    ) -> Result<Self, MapboxError> {
        config.validate().map_err(MapboxError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("giso/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MapboxError::Network {
                context: "HTTP client initialization".to_string(),
                reason: e.to_string(),
            })?;

        if let Some(token) = config.access_token_str() {
            tokens.set_token(token);
        }

        Ok(Self {
            client,
            config: config.clone(),
            tokens,
        })
    }

    /// Set the access token used by all subsequent requests
    pub fn set_token(&self, token: impl Into<String>) {
        self.tokens.set_token(token);
    }

    /// The token store this client reads from
    #[must_use]
    pub const fn token_store(&self) -> &TokenStore {
        &self.tokens
    }

    /// The client configuration
    #[must_use]
    pub const fn config(&self) -> &MapboxConfig {
        &self.config
    }

    /// Base URL without a trailing slash
    pub(crate) fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// GET `url` with `params` plus the access token and decode the JSON body
    ///
    /// `context` describes the request for error messages. Fails with
    /// [`MapboxError::Configuration`] before touching the network if no
    /// token is set.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        mut params: Vec<(&'static str, String)>,
        context: &str,
    ) -> Result<T, MapboxError> {
        let token = self.tokens.get_token().ok_or_else(MapboxError::missing_token)?;
        params.push(("access_token", token.expose_secret().to_string()));

        let network_error = |reason: String| MapboxError::Network {
            context: context.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    network_error(format!(
                        "timed out after {} seconds",
                        self.config.timeout_secs
                    ))
                } else {
                    // The URL carries the access token; keep it out of the message
                    network_error(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = match serde_json::from_str::<ErrorBody>(&body) {
                Ok(ErrorBody {
                    message: Some(message),
                }) => format!("HTTP {status}: {message}"),
                _ => format!("HTTP {status}"),
            };
            return Err(network_error(reason));
        }

        let body = response
            .text()
            .await
            .map_err(|e| network_error(e.without_url().to_string()))?;

        debug!(%context, bytes = body.len(), "Received Mapbox response");

        serde_json::from_str(&body).map_err(|e| MapboxError::Decode(e.to_string()))
    }
}
