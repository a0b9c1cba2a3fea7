//! Port traits for infrastructure boundaries.
//!
//! The engine hands extracted placements to a map surface it does not own
//! (3D renderer, a JSON stream, a test double). That surface is the only
//! abstraction here.

use holocron_domain::{AnnotatedEntity, AsciiCoordinate, EntityKind};
use serde::Serialize;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum MarkerError {
    #[error("Failed to write marker: {0}")]
    Write(#[from] std::io::Error),
    #[error("Failed to serialize marker: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Marker surface unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// Infrastructure Types
// =============================================================================

/// A placement ready for the map surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapMarker {
    /// 0-based position in the source text's annotation order
    pub sequence: usize,
    /// Tag classification, so the surface can pick a marker style
    pub kind: EntityKind,
    #[serde(flatten)]
    pub entity: AnnotatedEntity,
}

impl MapMarker {
    pub fn new(sequence: usize, entity: AnnotatedEntity) -> Self {
        Self {
            sequence,
            kind: entity.kind(),
            entity,
        }
    }
}

// =============================================================================
// Map Surface Port
// =============================================================================

/// Receives markers in placement order.
///
/// Implementations rely on markers arriving in ascending `sequence`.
#[cfg_attr(test, mockall::automock)]
pub trait MapMarkerPort: Send + Sync {
    fn place_marker(&self, marker: &MapMarker) -> Result<(), MarkerError>;

    /// Point the camera at a coordinate
    fn focus(&self, at: AsciiCoordinate) -> Result<(), MarkerError>;
}
