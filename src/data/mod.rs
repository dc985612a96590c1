//! External game data
//!
//! Pacing tables ship with built-in defaults but can be overridden from
//! RON or host-exported JSON files.

pub mod loader;

pub use loader::{load_pacing_tables, read_pacing_tables, DataError};
