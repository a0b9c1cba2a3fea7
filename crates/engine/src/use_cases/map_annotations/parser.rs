//! ASCII-map annotation parser.
//!
//! Pulls map placements out of game master text returned by the LLM:
//! - `(x:<int>,y:<int>,z:<int>)` - a bare coordinate group
//! - `[TAG](x:..,y:..,z:..)` - a typed placement
//! - `[TAG:Name](x:..,y:..,z:..)` - a typed, named placement
//!
//! Tags are `A-Z` and `_`. The coordinate group must follow the closing
//! bracket directly; `[NPC] (x:1,y:1,z:1)` is not a placement.
//!
//! Nothing here fails. Text that does not match is ignored, and a match whose
//! numbers do not fit in an `i64` is skipped.

use std::sync::LazyLock;

use holocron_domain::{AnnotatedEntity, AsciiCoordinate};
use regex_lite::{Captures, Regex};
use serde::Serialize;

// Compiled regexes for annotation extraction
static COORDINATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(x:(-?[0-9]+),y:(-?[0-9]+),z:(-?[0-9]+)\)").expect("valid regex")
});
static ANNOTATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([A-Z_]+)(?::([^\]]+))?\]\(x:(-?[0-9]+),y:(-?[0-9]+),z:(-?[0-9]+)\)")
        .expect("valid regex")
});

// Regex to remove model-specific special tokens:
// - <|...|> style tokens (common in many models)
// - [INST], [/INST] tokens (llama)
// - <<SYS>>, <</SYS>> tokens (llama)
static SPECIAL_TOKENS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\|[^|>]+\|>|\[/?INST\]|<</?SYS>>").expect("valid regex"));

// gpt-oss style: <|channel|>analysis<|message|>...<|end|><|start|>assistant<|channel|>final<|message|>CONTENT
static FINAL_CONTENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<\|channel\|>final<\|message\|>(.*)$").expect("valid regex"));

/// Annotated text split into display prose and placements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedAsciiMap {
    /// The text as given
    pub original: String,
    /// Text with each annotation replaced by its label
    pub clean_text: String,
    /// Placements in order of appearance
    pub entities: Vec<AnnotatedEntity>,
}

/// Find the first `(x:..,y:..,z:..)` group anywhere in the text.
pub fn parse_ascii_map_coordinates(text: &str) -> Option<AsciiCoordinate> {
    coordinate_groups(text).next()
}

/// Every `(x:..,y:..,z:..)` group in the text, tagged or bare, left to right.
pub fn coordinate_groups(text: &str) -> impl Iterator<Item = AsciiCoordinate> + '_ {
    COORDINATE_RE
        .captures_iter(text)
        .filter_map(|caps| coordinate_from(&caps, 1))
}

/// Extract every tagged placement, left to right.
///
/// The result only depends on `text`; calling again yields the same list.
pub fn extract_coordinates_from_ascii_map(text: &str) -> Vec<AnnotatedEntity> {
    annotations(text).collect()
}

/// Lazy form of [`extract_coordinates_from_ascii_map`].
pub fn annotations(text: &str) -> impl Iterator<Item = AnnotatedEntity> + '_ {
    ANNOTATION_RE
        .captures_iter(text)
        .filter_map(|caps| entity_from(&caps))
}

/// Extract placements and build a markup-free version of the text.
///
/// Named annotations become their name, unnamed ones their lowercased tag.
/// A match that yields no entity (overflowing numbers) is left as written.
/// Line structure is kept so ASCII maps still line up; only trailing
/// whitespace and surrounding blank lines are dropped.
pub fn parse_ascii_map(text: &str) -> ParsedAsciiMap {
    let entities = extract_coordinates_from_ascii_map(text);

    let replaced = ANNOTATION_RE.replace_all(text, |caps: &Captures<'_>| match entity_from(caps) {
        Some(entity) => entity.label().to_string(),
        None => caps[0].to_string(),
    });

    let clean_text = replaced
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_matches('\n')
        .to_string();

    ParsedAsciiMap {
        original: text.to_string(),
        clean_text,
        entities,
    }
}

/// Remove model-specific special tokens that may leak through from LLM output.
///
/// If a gpt-oss `<|channel|>final<|message|>` marker is present, only the
/// content after it is kept. Annotations are copied through untouched, so
/// `[INST](x:1,y:2,z:3)` stays a placement and names keep their characters.
pub fn strip_special_tokens(raw: &str) -> String {
    match FINAL_CONTENT_RE.captures(raw).and_then(|caps| caps.get(1)) {
        Some(content) => strip_outside_annotations(content.as_str().trim()),
        None => strip_outside_annotations(raw),
    }
}

fn strip_outside_annotations(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    let mut last = 0;

    for annotation in ANNOTATION_RE.find_iter(text) {
        stripped.push_str(&SPECIAL_TOKENS_RE.replace_all(&text[last..annotation.start()], ""));
        stripped.push_str(annotation.as_str());
        last = annotation.end();
    }
    stripped.push_str(&SPECIAL_TOKENS_RE.replace_all(&text[last..], ""));

    stripped
}

fn entity_from(caps: &Captures<'_>) -> Option<AnnotatedEntity> {
    let entity_type = caps.get(1)?.as_str().to_ascii_lowercase();
    let name = caps.get(2).map(|m| m.as_str().to_string());
    let coords = coordinate_from(caps, 3)?;

    Some(AnnotatedEntity::new(entity_type, name, coords))
}

/// Read three consecutive capture groups starting at `first` as x, y, z.
fn coordinate_from(caps: &Captures<'_>, first: usize) -> Option<AsciiCoordinate> {
    let axis = |offset: usize| -> Option<i64> {
        let literal = caps.get(first + offset)?.as_str();
        match literal.parse::<i64>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(
                    literal = literal,
                    error = %e,
                    "Skipping coordinate group that does not fit in i64"
                );
                None
            }
        }
    };

    Some(AsciiCoordinate::new(axis(0)?, axis(1)?, axis(2)?))
}
