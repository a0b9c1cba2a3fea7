//! Place map markers use case - forwards extracted placements to the map surface.

use std::sync::Arc;

use holocron_domain::AsciiCoordinate;
use serde::Serialize;

use super::extract::ExtractMapAnnotations;
use crate::infrastructure::ports::{MapMarker, MapMarkerPort, MarkerError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementSummary {
    pub placed: usize,
    pub skipped_out_of_bounds: usize,
    pub focus: Option<AsciiCoordinate>,
}

/// Places every in-bounds annotation, in text order, then focuses the camera.
///
/// Stops at the first surface error; markers already placed stay placed.
pub struct PlaceMapMarkers {
    extract: Arc<ExtractMapAnnotations>,
    markers: Arc<dyn MapMarkerPort>,
}

impl PlaceMapMarkers {
    pub fn new(extract: Arc<ExtractMapAnnotations>, markers: Arc<dyn MapMarkerPort>) -> Self {
        Self { extract, markers }
    }

    pub fn execute(&self, text: &str) -> Result<PlacementSummary, MarkerError> {
        let report = self.extract.execute(text);
        let skipped_out_of_bounds = report.out_of_bounds.len();

        let mut placed = 0;
        for (sequence, entity) in report.entities.into_iter().enumerate() {
            self.markers.place_marker(&MapMarker::new(sequence, entity))?;
            placed += 1;
        }

        if let Some(focus) = report.focus {
            self.markers.focus(focus)?;
        }

        tracing::info!(
            placed = placed,
            skipped_out_of_bounds = skipped_out_of_bounds,
            "Placed map markers"
        );

        Ok(PlacementSummary {
            placed,
            skipped_out_of_bounds,
            focus: report.focus,
        })
    }
}
