//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod map_annotations;

pub use map_annotations::{
    ExtractMapAnnotations, MapAnnotationReport, PlaceMapMarkers, PlacementSummary,
};
