//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{ports::MapMarkerPort, settings::ExtractorSettings};
use crate::use_cases;

/// Main application state.
///
/// Holds the settings and the use cases built from them.
pub struct App {
    pub settings: ExtractorSettings,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub extract: Arc<use_cases::ExtractMapAnnotations>,
}

impl App {
    pub fn new(settings: ExtractorSettings) -> Self {
        let extract = Arc::new(use_cases::ExtractMapAnnotations::new(settings.clone()));

        Self {
            settings,
            use_cases: UseCases { extract },
        }
    }

    /// Marker placement is bound to a surface, so it is built per surface.
    pub fn place_markers(&self, markers: Arc<dyn MapMarkerPort>) -> use_cases::PlaceMapMarkers {
        use_cases::PlaceMapMarkers::new(self.use_cases.extract.clone(), markers)
    }
}
