//! Bounds of a renderable scene map

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AsciiCoordinate;
use crate::error::DomainError;

/// Inclusive per-axis bounds, the same range on x, y and z.
///
/// Parsing coordinates never range-checks; the renderer decides what it can
/// show and uses this to split placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMapBounds")]
pub struct MapBounds {
    min: i64,
    max: i64,
}

#[derive(Deserialize)]
struct RawMapBounds {
    min: i64,
    max: i64,
}

impl TryFrom<RawMapBounds> for MapBounds {
    type Error = DomainError;

    fn try_from(raw: RawMapBounds) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl MapBounds {
    pub fn new(min: i64, max: i64) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::validation(format!(
                "map bounds min ({}) exceeds max ({})",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, coords: &AsciiCoordinate) -> bool {
        [coords.x, coords.y, coords.z]
            .iter()
            .all(|v| (self.min..=self.max).contains(v))
    }
}

/// Parses `min,max`, e.g. `-100,100`
impl FromStr for MapBounds {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = s
            .split_once(',')
            .ok_or_else(|| DomainError::parse(format!("Expected 'min,max', got '{}'", s)))?;

        let min: i64 = min
            .trim()
            .parse()
            .map_err(|_| DomainError::parse(format!("Invalid bounds minimum: '{}'", min.trim())))?;
        let max: i64 = max
            .trim()
            .parse()
            .map_err(|_| DomainError::parse(format!("Invalid bounds maximum: '{}'", max.trim())))?;

        Self::new(min, max)
    }
}
