//! Mapbox forward geocoding
//!
//! Resolves a free-text address to a latitude-first [`GeoLocation`] using
//! the first match of the `mapbox.places` endpoint. No caching: every call
//! is one request.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use tracing::{debug, instrument};

use crate::client::MapboxClient;
use crate::error::MapboxError;
use crate::models::GeocodeResponse;
use crate::urlencoding::encode_path_segment;

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form address to geographic coordinates
    async fn geocode(&self, address: &str) -> Result<GeoLocation, MapboxError>;
}

#[async_trait]
impl GeocodingClient for MapboxClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<GeoLocation, MapboxError> {
        let url = format!(
            "{}/geocoding/v5/mapbox.places/{}.json",
            self.base_url(),
            encode_path_segment(address)
        );
        let params = vec![("autocomplete", "true".to_string())];
        let context = format!("address '{address}'");

        debug!(%address, "Geocoding address");

        let response: GeocodeResponse = self.get_json(&url, params, &context).await?;
        let location = first_match(&response, address)?;

        debug!(
            %address,
            latitude = location.latitude(),
            longitude = location.longitude(),
            "Geocoded address"
        );
        Ok(location)
    }
}

/// Take the first feature's `center` and flip it to latitude-first
fn first_match(response: &GeocodeResponse, address: &str) -> Result<GeoLocation, MapboxError> {
    let feature = response.features.first().ok_or_else(|| {
        MapboxError::NotFound(format!(
            "No geocoding result found for the address: '{address}'"
        ))
    })?;

    GeoLocation::from_lon_lat(feature.center).map_err(|e| {
        MapboxError::Decode(format!(
            "center {:?} for '{address}' is not a valid [longitude, latitude] pair: {e}",
            feature.center
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GeocodeResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_center_is_flipped_to_lat_lon() {
        let response = parse(r#"{"features": [{"center": [100.0, 0.5]}]}"#);
        let location = first_match(&response, "somewhere").unwrap();
        assert_eq!(location.to_lat_lon(), [0.5, 100.0]);
    }

    #[test]
    fn test_only_first_feature_is_used() {
        let response = parse(
            r#"{"features": [
                {"center": [-0.14189, 51.50101]},
                {"center": [2.2945, 48.8584]}
            ]}"#,
        );
        let location = first_match(&response, "palace").unwrap();
        assert!((location.latitude() - 51.50101).abs() < f64::EPSILON);
        assert!((location.longitude() - -0.14189).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_features_is_not_found() {
        let response = parse(r#"{"features": []}"#);
        let err = first_match(&response, "atlantis").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("'atlantis'"));
    }

    #[test]
    fn test_out_of_range_center_is_decode_error() {
        let response = parse(r#"{"features": [{"center": [0.5, 100.0]}]}"#);
        let err = first_match(&response, "somewhere").unwrap_err();
        assert!(matches!(err, MapboxError::Decode(_)));
    }

    #[tokio::test]
    async fn test_geocode_without_token_is_configuration_error() {
        let client = MapboxClient::new(&crate::MapboxConfig::for_testing()).unwrap();
        let err = client.geocode("buckingham palace").await.unwrap_err();
        assert!(err.is_configuration());
    }
}
