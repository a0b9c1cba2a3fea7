//! Extractor settings loaded from the environment.
//!
//! | variable | default |
//! |----------|---------|
//! | `HOLOCRON_STRIP_SPECIAL_TOKENS` | `false` |
//! | `HOLOCRON_MAP_BOUNDS` | unset (no bounds check) |
//! | `HOLOCRON_MAX_INPUT_BYTES` | `1048576` |
//!
//! Empty values count as unset.

use std::collections::HashMap;
use std::path::Path;

use holocron_domain::MapBounds;
use serde::Serialize;

pub const STRIP_SPECIAL_TOKENS_VAR: &str = "HOLOCRON_STRIP_SPECIAL_TOKENS";
pub const MAP_BOUNDS_VAR: &str = "HOLOCRON_MAP_BOUNDS";
pub const MAX_INPUT_BYTES_VAR: &str = "HOLOCRON_MAX_INPUT_BYTES";

/// 1 MiB is far beyond any single model reply.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("Failed to read env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

impl SettingsError {
    fn invalid(key: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractorSettings {
    /// Remove leaked model control tokens before extraction.
    /// Off by default so extraction sees the reply exactly as written.
    pub strip_special_tokens: bool,
    /// Placements outside these bounds are reported separately
    pub map_bounds: Option<MapBounds>,
    /// Largest input the CLI will read
    pub max_input_bytes: usize,
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self {
            strip_special_tokens: false,
            map_bounds: None,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl ExtractorSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings from a dotenv-format file without touching the process environment.
    pub fn from_env_file(path: &Path) -> Result<Self, SettingsError> {
        let vars = dotenvy::from_path_iter(path)?.collect::<Result<HashMap<_, _>, _>>()?;
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Read settings through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut settings = Self::default();

        if let Some(value) = get(STRIP_SPECIAL_TOKENS_VAR) {
            settings.strip_special_tokens = parse_bool(STRIP_SPECIAL_TOKENS_VAR, &value)?;
        }

        if let Some(value) = get(MAP_BOUNDS_VAR) {
            let bounds = value
                .parse::<MapBounds>()
                .map_err(|e| SettingsError::invalid(MAP_BOUNDS_VAR, &value, e.to_string()))?;
            settings.map_bounds = Some(bounds);
        }

        if let Some(value) = get(MAX_INPUT_BYTES_VAR) {
            let limit = value
                .parse::<usize>()
                .map_err(|e| SettingsError::invalid(MAX_INPUT_BYTES_VAR, &value, e.to_string()))?;
            if limit == 0 {
                return Err(SettingsError::invalid(
                    MAX_INPUT_BYTES_VAR,
                    &value,
                    "must be greater than zero",
                ));
            }
            settings.max_input_bytes = limit;
        }

        Ok(settings)
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, SettingsError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(SettingsError::invalid(key, value, "expected true or false")),
    }
}

/// Load `.env.local` then `.env` from the repository root, if present.
///
/// Variables already set in the environment win over file values.
pub fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            if let Err(e) = dotenvy::from_path(&path) {
                tracing::warn!(path = %path.display(), error = %e, "Failed to load env file");
            }
        }
    }
}
