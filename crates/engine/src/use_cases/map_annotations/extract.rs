//! Extract map annotations use case - turns a model reply into a placement report.

use holocron_domain::{AnnotatedEntity, AsciiCoordinate};
use serde::Serialize;

use super::parser::{
    coordinate_groups, parse_ascii_map, parse_ascii_map_coordinates, strip_special_tokens,
};
use crate::infrastructure::settings::ExtractorSettings;

/// Everything the map surface and campaign updater need from one reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapAnnotationReport {
    /// In-bounds placements, in order of appearance
    pub entities: Vec<AnnotatedEntity>,
    /// Placements outside the configured map bounds, in order of appearance
    pub out_of_bounds: Vec<AnnotatedEntity>,
    /// First in-bounds coordinate group in the text, used to aim the camera
    pub focus: Option<AsciiCoordinate>,
    /// The reply with annotation markup replaced by labels
    pub clean_text: String,
}

impl MapAnnotationReport {
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.out_of_bounds.is_empty() && self.focus.is_none()
    }
}

/// Parses annotations out of game master text.
///
/// Never fails: unparseable text yields an empty report.
pub struct ExtractMapAnnotations {
    settings: ExtractorSettings,
}

impl ExtractMapAnnotations {
    pub fn new(settings: ExtractorSettings) -> Self {
        Self { settings }
    }

    pub fn execute(&self, text: &str) -> MapAnnotationReport {
        let sanitized;
        let text = if self.settings.strip_special_tokens {
            sanitized = strip_special_tokens(text);
            sanitized.as_str()
        } else {
            text
        };

        let parsed = parse_ascii_map(text);

        let (entities, out_of_bounds, focus): (Vec<_>, Vec<_>, _) = match self.settings.map_bounds {
            Some(bounds) => {
                let (inside, outside): (Vec<_>, Vec<_>) = parsed
                    .entities
                    .into_iter()
                    .partition(|entity| bounds.contains(&entity.coords));
                let focus = coordinate_groups(text).find(|coords| bounds.contains(coords));
                (inside, outside, focus)
            }
            None => (parsed.entities, Vec::new(), parse_ascii_map_coordinates(text)),
        };

        for entity in &out_of_bounds {
            tracing::warn!(
                entity_type = %entity.entity_type,
                name = ?entity.name,
                coords = %entity.coords,
                "Annotation outside map bounds"
            );
        }

        tracing::debug!(
            entities = entities.len(),
            out_of_bounds = out_of_bounds.len(),
            has_focus = focus.is_some(),
            "Extracted map annotations"
        );

        MapAnnotationReport {
            entities,
            out_of_bounds,
            focus,
            clean_text: parsed.clean_text,
        }
    }
}
