//! Mapbox isochrones
//!
//! Fetches the travel-time contour around an origin as a single polygon.
//! The upstream ring is `[longitude, latitude]`; it is returned
//! latitude-first with the point sequence untouched.

use async_trait::async_trait;
use domain::value_objects::{GeoLocation, Polygon, TravelProfile};
#[cfg(test)]
use mockall::automock;
use tracing::{debug, instrument};

use crate::client::MapboxClient;
use crate::error::MapboxError;
use crate::models::IsochroneResponse;

/// Trait for isochrone clients
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IsochroneClient: Send + Sync {
    /// Polygon reachable from `origin` within `minutes` using `profile`
    async fn isochrone(
        &self,
        origin: GeoLocation,
        minutes: u32,
        profile: TravelProfile,
    ) -> Result<Polygon, MapboxError>;
}

#[async_trait]
impl IsochroneClient for MapboxClient {
    #[instrument(skip(self, origin), fields(origin = %origin))]
    async fn isochrone(
        &self,
        origin: GeoLocation,
        minutes: u32,
        profile: TravelProfile,
    ) -> Result<Polygon, MapboxError> {
        // Upstream takes "{lon},{lat}" with the comma escaped
        let url = format!(
            "{}/isochrone/v1/mapbox/{}/{}%2C{}",
            self.base_url(),
            profile,
            origin.longitude(),
            origin.latitude()
        );
        let params = vec![
            ("contours_minutes", minutes.to_string()),
            ("contours_colors", self.config().contours_color.clone()),
            ("polygons", "true".to_string()),
            ("generalize", "0".to_string()),
        ];
        let context = describe(origin, minutes, profile);

        debug!(minutes, %profile, "Requesting isochrone");

        let response: IsochroneResponse = self.get_json(&url, params, &context).await?;
        let polygon = outer_polygon(&response, &context)?;

        debug!(minutes, points = polygon.len(), "Received isochrone");
        Ok(polygon)
    }
}

fn describe(origin: GeoLocation, minutes: u32, profile: TravelProfile) -> String {
    format!("{minutes} min {profile} isochrone from ({origin})")
}

/// Flip the first feature's outer ring into a latitude-first polygon
fn outer_polygon(response: &IsochroneResponse, context: &str) -> Result<Polygon, MapboxError> {
    let ring = response.outer_ring().ok_or_else(|| {
        MapboxError::NotFound(format!(
            "No isochrone shape found for the given parameters: {context}"
        ))
    })?;

    Polygon::from_lon_lat_ring(ring)
        .map_err(|e| MapboxError::Decode(format!("isochrone ring for {context}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> IsochroneResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_ring_is_flipped_in_order() {
        let response = parse(
            r#"{"features": [{"geometry": {"coordinates": [[[10, 1], [11, 2], [12, 3]]]}}]}"#,
        );
        let polygon = outer_polygon(&response, "ctx").unwrap();
        assert_eq!(
            polygon.to_lat_lon_pairs(),
            vec![[1.0, 10.0], [2.0, 11.0], [3.0, 12.0]]
        );
    }

    #[test]
    fn test_missing_geometry_is_not_found() {
        let response = parse(r#"{"features": []}"#);
        let err = outer_polygon(&response, "10 min driving").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("No isochrone shape found"));
        assert!(err.to_string().contains("10 min driving"));
    }

    #[test]
    fn test_out_of_range_point_is_decode_error() {
        let response =
            parse(r#"{"features": [{"geometry": {"coordinates": [[[10, 1], [10, 95]]]}}]}"#);
        let err = outer_polygon(&response, "ctx").unwrap_err();
        assert!(matches!(err, MapboxError::Decode(_)));
    }

    #[test]
    fn test_describe_mentions_parameters() {
        let origin = GeoLocation::new(51.5, -0.14).unwrap();
        let text = describe(origin, 15, TravelProfile::Walking);
        assert!(text.contains("15 min"));
        assert!(text.contains("walking"));
        assert!(text.contains("51.5"));
    }

    #[tokio::test]
    async fn test_isochrone_without_token_is_configuration_error() {
        let client = MapboxClient::new(&crate::MapboxConfig::for_testing()).unwrap();
        let origin = GeoLocation::new(51.5, -0.14).unwrap();
        let err = client
            .isochrone(origin, 10, TravelProfile::Driving)
            .await
            .unwrap_err();
        assert!(err.is_configuration());
    }
}
