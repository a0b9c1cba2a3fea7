//! API layer - entry points into the engine.

pub mod cli;

pub use cli::{run, Cli, CliError, Command, CoordsCommand};
