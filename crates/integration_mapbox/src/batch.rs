//! Multi-duration isochrones
//!
//! Requests one isochrone per duration, longest first, strictly one after
//! another. A failed duration is logged and skipped; the batch itself never
//! fails.

use std::sync::Arc;

use domain::value_objects::{GeoLocation, Polygon, TravelProfile};
use tracing::{debug, instrument, warn};

use crate::isochrone::IsochroneClient;

/// Sequential multi-duration isochrone fetcher
#[derive(Clone)]
pub struct IsochroneBatch {
    client: Arc<dyn IsochroneClient>,
}

impl std::fmt::Debug for IsochroneBatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IsochroneBatch").finish_non_exhaustive()
    }
}

impl IsochroneBatch {
    /// Create a batch fetcher on top of a single-isochrone client
    #[must_use]
    pub fn new(client: Arc<dyn IsochroneClient>) -> Self {
        Self { client }
    }

    /// Fetch one polygon per duration in `minutes`, ordered by descending duration
    ///
    /// `minutes` is copied before sorting, so the caller's slice is left as is.
    /// Durations whose request fails are omitted from the result, which can
    /// therefore be shorter than `minutes` or empty.
    #[instrument(skip(self, origin, minutes), fields(origin = %origin, durations = minutes.len()))]
    pub async fn isochrones(
        &self,
        origin: GeoLocation,
        minutes: &[u32],
        profile: TravelProfile,
    ) -> Vec<Polygon> {
        let mut durations = minutes.to_vec();
        durations.sort_unstable_by(|a, b| b.cmp(a));

        let mut polygons = Vec::with_capacity(durations.len());
        for duration in durations {
            match self.client.isochrone(origin, duration, profile).await {
                Ok(polygon) => polygons.push(polygon),
                Err(e) => {
                    warn!(minutes = duration, error = %e, "Failed to retrieve isochrone, skipping");
                },
            }
        }

        debug!(
            requested = minutes.len(),
            retrieved = polygons.len(),
            "Isochrone batch finished"
        );
        polygons
    }
}
