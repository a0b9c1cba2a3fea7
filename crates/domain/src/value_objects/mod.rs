//! Value objects - Immutable objects defined by their attributes

mod ascii_map;
mod coordinates;
mod map_bounds;

pub use ascii_map::{AnnotatedEntity, AsciiCoordinate, EntityKind};
pub use coordinates::{Coordinates, Segment, COORDINATE_DELIMITER};
pub use map_bounds::MapBounds;
