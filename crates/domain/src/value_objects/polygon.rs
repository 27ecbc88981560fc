//! Polygon value object
//!
//! A polygon is a single ring of latitude-first coordinates. Point order is
//! exactly the order it was built from; nothing here sorts, dedups or
//! simplifies.

use serde::{Deserialize, Serialize};

use super::geo_location::{GeoLocation, InvalidCoordinates};

/// An ordered ring of coordinates
///
/// Serializes as a list of `[latitude, longitude]` pairs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")]
pub struct Polygon {
    points: Vec<GeoLocation>,
}

impl Polygon {
    /// Create a polygon from already-validated points
    #[must_use]
    pub const fn new(points: Vec<GeoLocation>) -> Self {
        Self { points }
    }

    /// Build a polygon from a GeoJSON ring of `[longitude, latitude]` pairs
    ///
    /// Each pair has its two fields swapped; the sequence order of the
    /// points is kept as is.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if any point is out of range
    pub fn from_lon_lat_ring(ring: &[[f64; 2]]) -> Result<Self, InvalidCoordinates> {
        ring.iter()
            .copied()
            .map(GeoLocation::from_lon_lat)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// The points of the ring, in order
    #[must_use]
    pub fn points(&self) -> &[GeoLocation] {
        &self.points
    }

    /// Number of points in the ring
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the ring has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the first and last point coincide
    ///
    /// An empty polygon is not closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    /// The ring as `[latitude, longitude]` pairs
    #[must_use]
    pub fn to_lat_lon_pairs(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(GeoLocation::to_lat_lon).collect()
    }

    /// Consume the polygon and return its points
    #[must_use]
    pub fn into_points(self) -> Vec<GeoLocation> {
        self.points
    }
}

impl TryFrom<Vec<[f64; 2]>> for Polygon {
    type Error = InvalidCoordinates;

    fn try_from(pairs: Vec<[f64; 2]>) -> Result<Self, Self::Error> {
        pairs
            .into_iter()
            .map(GeoLocation::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

impl From<Polygon> for Vec<[f64; 2]> {
    fn from(polygon: Polygon) -> Self {
        polygon.to_lat_lon_pairs()
    }
}
