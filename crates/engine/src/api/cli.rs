//! Command-line entry point.
//!
//! Reads model replies from a file or stdin and writes JSON to stdout, so the
//! campaign manager can shell out to it or pipe it into a renderer.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use holocron_domain::{Coordinates, DomainError};

use crate::app::App;
use crate::infrastructure::marker_sink::JsonLinesMarkerSink;
use crate::infrastructure::ports::MarkerError;

#[derive(Debug, Parser)]
#[command(name = "holocron", version)]
#[command(about = "Extract scene-map annotations from game master text")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the annotation report as JSON
    Extract {
        /// Reply to read; omit or pass `-` for stdin
        file: Option<PathBuf>,
    },
    /// Stream markers as JSON lines
    Markers {
        /// Reply to read; omit or pass `-` for stdin
        file: Option<PathBuf>,
    },
    /// Print the first in-bounds coordinate group, or `null`
    Locate {
        /// Reply to read; omit or pass `-` for stdin
        file: Option<PathBuf>,
    },
    /// Location path tools
    #[command(subcommand)]
    Coords(CoordsCommand),
}

#[derive(Debug, Subcommand)]
pub enum CoordsCommand {
    /// Print a location path as JSON
    Parse {
        #[arg(allow_hyphen_values = true)]
        path: String,
    },
    /// Read location JSON from stdin and print the path
    Format,
    /// Fail if the location path has a gap in its hierarchy
    Check {
        #[arg(allow_hyphen_values = true)]
        path: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Input exceeds the {limit} byte limit")]
    InputTooLarge { limit: usize },
    #[error("Failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Marker(#[from] MarkerError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Run one command. `input` stands in for stdin, `output` for stdout.
pub fn run<R, W>(command: &Command, app: &App, input: R, mut output: W) -> Result<(), CliError>
where
    R: Read,
    W: Write + Send + 'static,
{
    let limit = app.settings.max_input_bytes;

    match command {
        Command::Extract { file } => {
            let text = read_input(file.as_deref(), input, limit)?;
            let report = app.use_cases.extract.execute(&text);
            serde_json::to_writer_pretty(&mut output, &report)?;
            writeln!(output)?;
        }
        Command::Markers { file } => {
            let text = read_input(file.as_deref(), input, limit)?;
            let sink = Arc::new(JsonLinesMarkerSink::new(output));
            let summary = app.place_markers(sink).execute(&text)?;
            tracing::debug!(?summary, "Marker stream complete");
        }
        Command::Locate { file } => {
            let text = read_input(file.as_deref(), input, limit)?;
            let focus = app.use_cases.extract.execute(&text).focus;
            serde_json::to_writer(&mut output, &focus)?;
            writeln!(output)?;
        }
        Command::Coords(CoordsCommand::Parse { path }) => {
            let coords = Coordinates::parse(path);
            serde_json::to_writer_pretty(&mut output, &coords)?;
            writeln!(output)?;
        }
        Command::Coords(CoordsCommand::Format) => {
            let text = read_limited(input, limit)?;
            let coords: Coordinates = serde_json::from_str(&text)?;
            writeln!(output, "{}", coords)?;
        }
        Command::Coords(CoordsCommand::Check { path }) => {
            let coords = Coordinates::parse(path);
            coords.validate_hierarchy()?;
            writeln!(output, "ok: {} levels", coords.depth())?;
        }
    }

    Ok(())
}

/// Read from `file`, or from `input` when no file (or `-`) is given.
fn read_input<R: Read>(file: Option<&Path>, input: R, limit: usize) -> Result<String, CliError> {
    match file {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path).map_err(|source| CliError::Open {
                path: path.display().to_string(),
                source,
            })?;
            read_limited(file, limit)
        }
        _ => read_limited(input, limit),
    }
}

fn read_limited<R: Read>(reader: R, limit: usize) -> Result<String, CliError> {
    let mut bytes = Vec::new();
    reader
        .take(u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1))
        .read_to_end(&mut bytes)?;

    if bytes.len() > limit {
        return Err(CliError::InputTooLarge { limit });
    }

    String::from_utf8(bytes)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
