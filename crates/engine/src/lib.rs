//! Holocron Engine library.
//!
//! Extracts map placements from game master text returned by the LLM.
//!
//! ## Structure
//!
//! - `use_cases/` - Annotation parsing and marker placement
//! - `infrastructure/` - Settings, the map surface port, and its adapters
//! - `api/` - Command-line entry point
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
