//! ASCII-map value objects
//!
//! The game master model annotates its scene maps with bracketed tags placed
//! on an integer grid, e.g. `[NPC:Stormtrooper](x:10,y:0,z:5)`. The engine's
//! extractor turns those into [`AnnotatedEntity`] values; this module only
//! defines the shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point on the scene map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AsciiCoordinate {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl AsciiCoordinate {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }
}

/// Renders in the same `(x:..,y:..,z:..)` form the extractor reads.
impl fmt::Display for AsciiCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x:{},y:{},z:{})", self.x, self.y, self.z)
    }
}

/// One tagged placement pulled out of a block of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedEntity {
    /// The tag, lowercased (e.g. `npc`, `location`)
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Present only when the tag carried a `:name` part
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub coords: AsciiCoordinate,
}

impl AnnotatedEntity {
    pub fn new(
        entity_type: impl Into<String>,
        name: Option<String>,
        coords: AsciiCoordinate,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            name,
            coords,
        }
    }

    /// Classify the tag for the campaign-state updater
    pub fn kind(&self) -> EntityKind {
        EntityKind::from_tag(&self.entity_type)
    }

    /// Name if given, otherwise the type (used as a display label)
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.entity_type)
    }
}

/// Known annotation tags.
///
/// Tags the updater does not recognise are kept verbatim in `Other` rather
/// than rejected, since the tag vocabulary is whatever the model produces.
/// Serialized as the canonical lowercase tag, e.g. `"ship"` for `STARSHIP`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum EntityKind {
    Npc,
    Player,
    Enemy,
    Droid,
    Location,
    Ship,
    Item,
    Hazard,
    Objective,
    Other(String),
}

impl EntityKind {
    /// Map a tag (any case) to a kind, folding common aliases.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "npc" => Self::Npc,
            "pc" | "player" => Self::Player,
            "enemy" | "hostile" => Self::Enemy,
            "droid" => Self::Droid,
            "location" | "poi" => Self::Location,
            "ship" | "starship" | "vehicle" => Self::Ship,
            "item" | "loot" => Self::Item,
            "hazard" => Self::Hazard,
            "objective" => Self::Objective,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Npc => write!(f, "npc"),
            EntityKind::Player => write!(f, "player"),
            EntityKind::Enemy => write!(f, "enemy"),
            EntityKind::Droid => write!(f, "droid"),
            EntityKind::Location => write!(f, "location"),
            EntityKind::Ship => write!(f, "ship"),
            EntityKind::Item => write!(f, "item"),
            EntityKind::Hazard => write!(f, "hazard"),
            EntityKind::Objective => write!(f, "objective"),
            EntityKind::Other(tag) => write!(f, "{}", tag),
        }
    }
}

impl From<String> for EntityKind {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<EntityKind> for String {
    fn from(kind: EntityKind) -> Self {
        kind.to_string()
    }
}
