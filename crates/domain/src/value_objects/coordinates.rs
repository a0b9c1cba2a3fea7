//! Hierarchical location paths
//!
//! A location path walks down from the galaxy to a spot on a local map:
//!
//! ```text
//! Outer Rim - Tatoosh System - Tatooine - Mos Eisley - Docking Bay 94 (Grid: C4)
//! galactic    system           planet     region       local          grid
//! ```
//!
//! Segments are positional. [`Coordinates::parse`] assigns the parts of a
//! `" - "`-delimited string in order and never fails; [`Coordinates::format`]
//! joins whichever segments are present. Formatting skips absent middle
//! segments without leaving a placeholder, so a path with `region` set but
//! `system` missing comes back from `parse` with its fields shifted up. That
//! asymmetry is kept as-is; use [`Coordinates::validate_hierarchy`] when a
//! caller needs to reject such paths.
//!
//! # Example
//!
//! ```
//! use holocron_domain::Coordinates;
//!
//! let coords = Coordinates::parse("Core Worlds - Coruscant System - Coruscant - Uscru District - Cantina (Grid: B7)");
//! assert_eq!(coords.planet.as_deref(), Some("Coruscant"));
//! assert_eq!(coords.local.as_deref(), Some("Cantina"));
//! assert_eq!(coords.grid.as_deref(), Some("B7"));
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Delimiter between location segments in the textual form.
pub const COORDINATE_DELIMITER: &str = " - ";

const GRID_OPEN: &str = "(Grid: ";

/// One named field of a location path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Galactic,
    System,
    Planet,
    Region,
    Local,
    Grid,
}

impl Segment {
    /// All segments, outermost first
    pub const ALL: [Segment; 6] = [
        Segment::Galactic,
        Segment::System,
        Segment::Planet,
        Segment::Region,
        Segment::Local,
        Segment::Grid,
    ];
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Galactic => write!(f, "galactic"),
            Segment::System => write!(f, "system"),
            Segment::Planet => write!(f, "planet"),
            Segment::Region => write!(f, "region"),
            Segment::Local => write!(f, "local"),
            Segment::Grid => write!(f, "grid"),
        }
    }
}

/// A hierarchical location path.
///
/// Empty strings are treated the same as absent segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub galactic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    /// Grid reference on the local map, rendered as `(Grid: <grid>)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<String>,
}

impl Coordinates {
    /// Start a path at the galactic level
    pub fn galactic(name: impl Into<String>) -> Self {
        Self {
            galactic: Some(name.into()),
            ..Self::default()
        }
    }

    // Builder-style methods

    pub fn with_system(mut self, name: impl Into<String>) -> Self {
        self.system = Some(name.into());
        self
    }

    pub fn with_planet(mut self, name: impl Into<String>) -> Self {
        self.planet = Some(name.into());
        self
    }

    pub fn with_region(mut self, name: impl Into<String>) -> Self {
        self.region = Some(name.into());
        self
    }

    pub fn with_local(mut self, name: impl Into<String>) -> Self {
        self.local = Some(name.into());
        self
    }

    pub fn with_grid(mut self, grid: impl Into<String>) -> Self {
        self.grid = Some(grid.into());
        self
    }

    /// Parse a `" - "`-delimited location string.
    ///
    /// Parts are assigned to `galactic`, `system`, `planet` and `region` in
    /// order. Everything after the fourth delimiter is the `local` segment,
    /// which may carry a `(Grid: <alphanumeric>)` annotation. Never fails:
    /// short or odd input just populates fewer fields.
    pub fn parse(coord_string: &str) -> Self {
        let mut parts = coord_string.split(COORDINATE_DELIMITER);

        let galactic = parts.next().and_then(non_empty);
        let system = parts.next().and_then(non_empty);
        let planet = parts.next().and_then(non_empty);
        let region = parts.next().and_then(non_empty);

        // Keep any further delimiters inside the local segment
        let rest: Vec<&str> = parts.collect();
        let (local, grid) = if rest.is_empty() {
            (None, None)
        } else {
            split_grid(&rest.join(COORDINATE_DELIMITER))
        };

        Self {
            galactic,
            system,
            planet,
            region,
            local,
            grid,
        }
    }

    /// Render the path as text. Equivalent to `to_string()`.
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Look up a single segment
    pub fn get(&self, segment: Segment) -> Option<&str> {
        let value = match segment {
            Segment::Galactic => &self.galactic,
            Segment::System => &self.system,
            Segment::Planet => &self.planet,
            Segment::Region => &self.region,
            Segment::Local => &self.local,
            Segment::Grid => &self.grid,
        };
        present(value)
    }

    /// Present segments in hierarchy order, for breadcrumb rendering
    pub fn segments(&self) -> Vec<(Segment, &str)> {
        Segment::ALL
            .iter()
            .filter_map(|&segment| self.get(segment).map(|value| (segment, value)))
            .collect()
    }

    /// Number of present hierarchy levels (the grid annotation is not a level)
    pub fn depth(&self) -> usize {
        self.segments()
            .iter()
            .filter(|(segment, _)| *segment != Segment::Grid)
            .count()
    }

    /// Check that no segment is set below a missing parent.
    ///
    /// `parse` and `format` never call this; it is for callers that need
    /// paths to survive a format/parse round trip with the same shape.
    pub fn validate_hierarchy(&self) -> Result<(), DomainError> {
        let mut missing: Option<Segment> = None;

        for segment in Segment::ALL {
            match (self.get(segment), missing) {
                (Some(_), Some(parent)) => {
                    return Err(DomainError::validation(format!(
                        "{} is set but {} is missing",
                        segment, parent
                    )));
                }
                (None, None) => missing = Some(segment),
                _ => {}
            }
        }

        Ok(())
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(present(&self.galactic).unwrap_or_default())?;

        for segment in [&self.system, &self.planet, &self.region] {
            if let Some(value) = present(segment) {
                write!(f, "{}{}", COORDINATE_DELIMITER, value)?;
            }
        }

        if let Some(local) = present(&self.local) {
            write!(f, "{}{}", COORDINATE_DELIMITER, local)?;
            if let Some(grid) = present(&self.grid) {
                write!(f, " {}{})", GRID_OPEN, grid)?;
            }
        }

        Ok(())
    }
}

impl FromStr for Coordinates {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn non_empty(part: &str) -> Option<String> {
    (!part.is_empty()).then(|| part.to_string())
}

/// Split a local segment into its name and optional grid reference.
fn split_grid(segment: &str) -> (Option<String>, Option<String>) {
    let Some((start, end, grid)) = find_grid_annotation(segment) else {
        return (non_empty(segment), None);
    };

    let before = &segment[..start];
    let before = before.strip_suffix(' ').unwrap_or(before);

    let mut local = String::with_capacity(segment.len());
    local.push_str(before);
    local.push_str(&segment[end..]);

    (non_empty(&local), Some(grid.to_string()))
}

/// Find the first `(Grid: <alphanumeric>)` and return its byte span and content.
fn find_grid_annotation(segment: &str) -> Option<(usize, usize, &str)> {
    let mut from = 0;

    while let Some(offset) = segment[from..].find(GRID_OPEN) {
        let start = from + offset;
        let body_start = start + GRID_OPEN.len();
        let body = &segment[body_start..];
        let len = body
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(body.len());

        if len > 0 && body[len..].starts_with(')') {
            return Some((start, body_start + len + 1, &body[..len]));
        }

        // '(' is one byte, so this stays on a char boundary
        from = start + 1;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Segment values with spaces, digits and apostrophes
    const NAMES: [&str; 5] = [
        "Outer Rim",
        "Sector 7",
        "Chalmun's Cantina",
        "Docking Bay 94",
        "Ord Mantell",
    ];
    const GRIDS: [&str; 3] = ["A1", "12", "zz9"];

    fn full_path() -> Coordinates {
        Coordinates::galactic("Outer Rim")
            .with_system("Tatoo System")
            .with_planet("Tatooine")
            .with_region("Mos Eisley")
    }

    /// Galactic through region, starting `offset` entries into [`NAMES`]
    fn rotated_path(offset: usize) -> Coordinates {
        let name = |level: usize| NAMES[(offset + level) % NAMES.len()];
        Coordinates::galactic(name(0))
            .with_system(name(1))
            .with_planet(name(2))
            .with_region(name(3))
    }

    #[test]
    fn test_round_trip_leading_segments() {
        for offset in 0..NAMES.len() {
            let name = |level: usize| NAMES[(offset + level) % NAMES.len()];
            let cases = [
                Coordinates::galactic(name(0)),
                Coordinates::galactic(name(0)).with_system(name(1)),
                Coordinates::galactic(name(0))
                    .with_system(name(1))
                    .with_planet(name(2)),
                rotated_path(offset),
            ];

            for coords in cases {
                assert_eq!(Coordinates::parse(&coords.format()), coords, "{}", coords);
            }
        }
    }

    #[test]
    fn test_round_trip_local_without_grid() {
        let coords = full_path().with_local("Chalmun's Cantina");
        assert_eq!(
            coords.format(),
            "Outer Rim - Tatoo System - Tatooine - Mos Eisley - Chalmun's Cantina"
        );

        for offset in 0..NAMES.len() {
            let local = NAMES[(offset + 4) % NAMES.len()];
            let coords = rotated_path(offset).with_local(local);
            let text = coords.format();

            assert!(text.ends_with(&format!(" - {}", local)));
            assert_eq!(Coordinates::parse(&text), coords, "{}", text);
        }
    }

    #[test]
    fn test_round_trip_local_with_grid() {
        for offset in 0..NAMES.len() {
            for grid in GRIDS {
                let local = NAMES[(offset + 4) % NAMES.len()];
                let coords = rotated_path(offset).with_local(local).with_grid(grid);
                let text = coords.format();

                assert!(text.ends_with(&format!("{} (Grid: {})", local, grid)));
                assert_eq!(Coordinates::parse(&text), coords, "{}", text);
            }
        }
    }

    #[test]
    fn test_parse_partial_path() {
        let coords = Coordinates::parse("Core Worlds - Coruscant System");

        assert_eq!(coords.galactic.as_deref(), Some("Core Worlds"));
        assert_eq!(coords.system.as_deref(), Some("Coruscant System"));
        assert!(coords.planet.is_none());
        assert!(coords.region.is_none());
        assert!(coords.local.is_none());
        assert!(coords.grid.is_none());
    }

    #[test]
    fn test_parse_empty_string() {
        assert_eq!(Coordinates::parse(""), Coordinates::default());
    }

    #[test]
    fn test_parse_keeps_extra_delimiters_in_local() {
        let coords = Coordinates::parse("A - B - C - D - Hangar - Bay 3 (Grid: A1)");

        assert_eq!(coords.local.as_deref(), Some("Hangar - Bay 3"));
        assert_eq!(coords.grid.as_deref(), Some("A1"));
    }

    #[test]
    fn test_parse_grid_requires_alphanumeric_body() {
        let coords = Coordinates::parse("A - B - C - D - Hangar (Grid: A-1)");

        assert_eq!(coords.local.as_deref(), Some("Hangar (Grid: A-1)"));
        assert!(coords.grid.is_none());
    }

    #[test]
    fn test_parse_grid_without_leading_space() {
        let coords = Coordinates::parse("A - B - C - D - Hangar(Grid: Z9)");

        assert_eq!(coords.local.as_deref(), Some("Hangar"));
        assert_eq!(coords.grid.as_deref(), Some("Z9"));
    }

    #[test]
    fn test_parse_skips_malformed_grid_then_finds_next() {
        let coords = Coordinates::parse("A - B - C - D - Ring (Grid: ) (Grid: 12)");

        assert_eq!(coords.local.as_deref(), Some("Ring (Grid: )"));
        assert_eq!(coords.grid.as_deref(), Some("12"));
    }

    #[test]
    fn test_format_skips_absent_middle_segment() {
        let coords = Coordinates {
            galactic: Some("Mid Rim".to_string()),
            region: Some("Kachirho".to_string()),
            ..Coordinates::default()
        };

        // Region lands in the system slot on the way back
        let reparsed = Coordinates::parse(&coords.format());
        assert_eq!(coords.format(), "Mid Rim - Kachirho");
        assert_eq!(reparsed.system.as_deref(), Some("Kachirho"));
        assert!(reparsed.region.is_none());
    }

    #[test]
    fn test_format_grid_needs_local() {
        let coords = full_path().with_grid("C4");
        assert_eq!(coords.format(), "Outer Rim - Tatoo System - Tatooine - Mos Eisley");
    }

    #[test]
    fn test_format_treats_empty_strings_as_absent() {
        let coords = Coordinates::galactic("Unknown Regions").with_system("");
        assert_eq!(coords.format(), "Unknown Regions");
    }

    #[test]
    fn test_from_str_matches_parse() {
        let text = "Outer Rim - Tatoo System";
        let coords: Coordinates = text.parse().unwrap_or_default();
        assert_eq!(coords, Coordinates::parse(text));
        assert_eq!(coords.to_string(), text);
    }

    #[test]
    fn test_segments_and_depth() {
        let coords = full_path().with_local("Cantina").with_grid("B2");
        let segments = coords.segments();

        assert_eq!(segments.len(), 6);
        assert_eq!(segments[0], (Segment::Galactic, "Outer Rim"));
        assert_eq!(segments[5], (Segment::Grid, "B2"));
        assert_eq!(coords.depth(), 5);
        assert_eq!(Coordinates::default().depth(), 0);
    }

    #[test]
    fn test_validate_hierarchy_accepts_contiguous_paths() {
        assert!(Coordinates::default().validate_hierarchy().is_ok());
        assert!(full_path().validate_hierarchy().is_ok());
        assert!(full_path()
            .with_local("Cantina")
            .with_grid("B2")
            .validate_hierarchy()
            .is_ok());
    }

    #[test]
    fn test_validate_hierarchy_rejects_gaps() {
        let gap = Coordinates {
            galactic: Some("Mid Rim".to_string()),
            region: Some("Kachirho".to_string()),
            ..Coordinates::default()
        };
        let err = gap.validate_hierarchy().expect_err("system is missing");
        assert_eq!(
            err,
            DomainError::validation("region is set but system is missing")
        );

        let orphan_grid = full_path().with_grid("C4");
        assert!(orphan_grid.validate_hierarchy().is_err());
    }

    #[test]
    fn test_serde_shape() {
        let coords = Coordinates::galactic("Core Worlds").with_system("Alderaan System");
        let json = serde_json::to_value(&coords).expect("serialize");

        assert_eq!(
            json,
            serde_json::json!({"galactic": "Core Worlds", "system": "Alderaan System"})
        );

        let back: Coordinates = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, coords);
    }
}
