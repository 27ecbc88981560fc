//! Mapbox error types

use thiserror::Error;

/// Errors that can occur while talking to the Mapbox APIs
#[derive(Debug, Error)]
pub enum MapboxError {
    /// The client is misconfigured (no access token set, or invalid settings)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transport failure or non-success HTTP status
    #[error("Request failed for {context}: {reason}")]
    Network {
        /// What was being requested (address, or isochrone parameters)
        context: String,
        /// Underlying cause
        reason: String,
    },

    /// Response body could not be decoded into the expected shape
    #[error("Failed to decode the response from the Mapbox API: {0}")]
    Decode(String),

    /// Well-formed response without a usable result
    #[error("{0}")]
    NotFound(String),
}

impl MapboxError {
    /// Error for a request attempted before a token was set
    #[must_use]
    pub fn missing_token() -> Self {
        Self::Configuration(
            "Mapbox API token has not been set. Set it with `set_token` before making requests."
                .to_string(),
        )
    }

    /// Returns true if the upstream answered but had nothing to return
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns true if the error is caller misuse rather than an upstream failure
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
