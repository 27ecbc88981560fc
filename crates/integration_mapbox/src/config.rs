//! Mapbox client configuration

use domain::TravelProfile;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration for the Mapbox geocoding and isochrone clients
#[derive(Clone, Serialize, Deserialize)]
pub struct MapboxConfig {
    /// Base URL for the Mapbox API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Access token (sensitive - uses SecretString)
    ///
    /// Optional here; it can also be set later on the client's token store.
    #[serde(default, skip_serializing)]
    pub access_token: Option<SecretString>,

    /// Hex color (without `#`) requested for isochrone contours
    #[serde(default = "default_contours_color")]
    pub contours_color: String,

    /// Travel profile callers fall back to when they have no preference
    #[serde(default)]
    pub default_profile: TravelProfile,
}

impl std::fmt::Debug for MapboxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field(
                "access_token",
                &if self.access_token.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("contours_color", &self.contours_color)
            .field("default_profile", &self.default_profile)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.mapbox.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_contours_color() -> String {
    "54278f".to_string()
}

impl Default for MapboxConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            access_token: None,
            contours_color: default_contours_color(),
            default_profile: TravelProfile::default(),
        }
    }
}

impl MapboxConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            default_profile: TravelProfile::Driving,
            ..Default::default()
        }
    }

    /// Set the access token
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(SecretString::from(token.into()));
        self
    }

    /// Get the access token as a string reference
    #[must_use]
    pub fn access_token_str(&self) -> Option<&str> {
        self.access_token.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Load configuration from an optional `mapbox.toml` and the environment
    ///
    /// Environment variables use the `MAPBOX_` prefix, e.g.
    /// `MAPBOX_ACCESS_TOKEN` or `MAPBOX_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or holds values of the wrong type.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        Self::load_from(None)
    }

    /// Load with `env` standing in for the process environment when given
    ///
    /// Values stay strings until deserialization; `000000` remains a color.
    fn load_from(
        env: Option<::config::Map<String, String>>,
    ) -> Result<Self, ::config::ConfigError> {
        let builder = ::config::Config::builder()
            .add_source(::config::File::with_name("mapbox").required(false))
            .add_source(
                ::config::Environment::with_prefix("MAPBOX")
                    .prefix_separator("_")
                    .source(env),
            );

        builder.build()?.try_deserialize()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.contours_color.len() != 6
            || !self.contours_color.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err("contours_color must be six hex digits without '#'".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MapboxConfig::default();
        assert_eq!(config.base_url, "https://api.mapbox.com");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.access_token.is_none());
        assert_eq!(config.contours_color, "54278f");
        assert_eq!(config.default_profile, TravelProfile::Driving);
    }

    #[test]
    fn test_testing_config() {
        let config = MapboxConfig::for_testing();
        assert_eq!(config.timeout_secs, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_access_token() {
        let config = MapboxConfig::default().with_access_token("pk.abc");
        assert_eq!(config.access_token_str(), Some("pk.abc"));
    }

    #[test]
    fn test_validation_success() {
        assert!(MapboxConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = MapboxConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = MapboxConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_color() {
        for color in ["#54278f", "54278", "zzzzzz"] {
            let config = MapboxConfig {
                contours_color: color.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{color} should be rejected");
        }
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = MapboxConfig::default().with_access_token("pk.secret-value");
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret-value"));
    }

    #[test]
    fn test_token_is_never_serialized() {
        let config = MapboxConfig::default().with_access_token("pk.secret-value");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret-value"));
        assert!(!json.contains("access_token"));
    }

    fn env(vars: &[(&str, &str)]) -> ::config::Map<String, String> {
        vars.iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_load_with_empty_env_gives_defaults() {
        // No mapbox.toml in the test working directory
        let config = MapboxConfig::load_from(Some(env(&[]))).unwrap();
        assert_eq!(config.base_url, "https://api.mapbox.com");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.access_token.is_none());
        assert_eq!(config.contours_color, "54278f");
        assert_eq!(config.default_profile, TravelProfile::Driving);
    }

    #[test]
    fn test_load_keeps_numeric_looking_strings() {
        let config = MapboxConfig::load_from(Some(env(&[
            ("MAPBOX_CONTOURS_COLOR", "000000"),
            ("MAPBOX_ACCESS_TOKEN", "0012345"),
        ])))
        .unwrap();
        assert_eq!(config.contours_color, "000000");
        assert_eq!(config.access_token_str(), Some("0012345"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_parses_typed_values_from_env() {
        let config = MapboxConfig::load_from(Some(env(&[
            ("MAPBOX_TIMEOUT_SECS", "45"),
            ("MAPBOX_DEFAULT_PROFILE", "walking"),
            ("MAPBOX_BASE_URL", "http://localhost:8080"),
        ])))
        .unwrap();
        assert_eq!(config.timeout_secs, 45);
        assert_eq!(config.default_profile, TravelProfile::Walking);
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_load_rejects_unknown_profile() {
        let result =
            MapboxConfig::load_from(Some(env(&[("MAPBOX_DEFAULT_PROFILE", "teleport")])));
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: MapboxConfig =
            serde_json::from_str(r#"{"access_token": "pk.abc", "contours_color": "ff0000"}"#)
                .unwrap();
        assert_eq!(config.access_token_str(), Some("pk.abc"));
        assert_eq!(config.contours_color, "ff0000");
        assert_eq!(config.base_url, "https://api.mapbox.com");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.default_profile, TravelProfile::Driving);

        let config: MapboxConfig =
            serde_json::from_str(r#"{"default_profile": "driving-traffic"}"#).unwrap();
        assert_eq!(config.default_profile, TravelProfile::DrivingTraffic);
    }
}
