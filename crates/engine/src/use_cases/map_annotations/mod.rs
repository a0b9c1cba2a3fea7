//! Map annotation use cases.
//!
//! Turn game master text into placements for the scene map.

mod extract;
pub mod parser;
mod place_markers;

pub use extract::{ExtractMapAnnotations, MapAnnotationReport};
pub use parser::{
    annotations, coordinate_groups, extract_coordinates_from_ascii_map, parse_ascii_map,
    parse_ascii_map_coordinates, strip_special_tokens, ParsedAsciiMap,
};
pub use place_markers::{PlaceMapMarkers, PlacementSummary};
