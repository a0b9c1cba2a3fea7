//! Holocron domain: location paths, map coordinates, and annotated entities.
//!
//! Everything here is an immutable value object. Text extraction lives in
//! `holocron-engine`; this crate holds the shared vocabulary and the single
//! implementation of the location-path codec used by every caller.

pub mod error;
pub mod value_objects;

pub use error::DomainError;

pub use value_objects::{
    AnnotatedEntity, AsciiCoordinate, Coordinates, EntityKind, MapBounds, Segment,
    COORDINATE_DELIMITER,
};
