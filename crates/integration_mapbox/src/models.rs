//! Raw Mapbox response schemas
//!
//! Only the fields this crate reads are modelled; everything else in the
//! GeoJSON payloads is ignored. Coordinates are `[longitude, latitude]`.

use serde::Deserialize;

/// Geocoding (`mapbox.places`) response
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    #[serde(default)]
    pub features: Vec<GeocodeFeature>,
}

/// A single geocoding match
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeFeature {
    pub center: [f64; 2],
}

/// Isochrone response
#[derive(Debug, Deserialize)]
pub(crate) struct IsochroneResponse {
    #[serde(default)]
    pub features: Vec<IsochroneFeature>,
}

/// A single contour
#[derive(Debug, Deserialize)]
pub(crate) struct IsochroneFeature {
    #[serde(default)]
    pub geometry: Option<IsochroneGeometry>,
}

/// Polygon geometry: a list of rings, the first being the outer ring
#[derive(Debug, Deserialize)]
pub(crate) struct IsochroneGeometry {
    #[serde(default)]
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

/// Error payload returned alongside non-success statuses
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl IsochroneResponse {
    /// Outer ring of the first feature, if there is a non-empty one
    pub fn outer_ring(&self) -> Option<&[[f64; 2]]> {
        self.features
            .first()?
            .geometry
            .as_ref()?
            .coordinates
            .first()
            .map(Vec::as_slice)
            .filter(|ring| !ring.is_empty())
    }
}
