//! Progression table loader
//!
//! Reads pacing tables from RON files or host-exported JSON, falling back
//! to the built-in defaults when a file is missing or malformed.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::progression::{Pacing, PacingTables};

/// Problems with the content of an external table file
#[derive(Debug, Error)]
pub enum DataError {
    #[error("pacing table '{0}' is empty")]
    EmptyTable(&'static str),
    #[error("pacing table '{0}' decreases at level {1}")]
    NotMonotonic(&'static str, usize),
}

/// Load pacing tables from disk, with built-in defaults on any failure
pub fn load_pacing_tables(path: &Path) -> PacingTables {
    match read_pacing_tables(path) {
        Ok(tables) => tables,
        Err(e) => {
            log::warn!(
                "Failed to load pacing tables from {}: {:#}. Using defaults.",
                path.display(),
                e
            );
            PacingTables::default()
        }
    }
}

/// Strict variant of [`load_pacing_tables`]: errors instead of falling back.
///
/// `.json` files parse as host-exported JSON; anything else parses as RON.
pub fn read_pacing_tables(path: &Path) -> Result<PacingTables> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let tables: HashMap<Pacing, Vec<i64>> = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("parsing {} as JSON", path.display()))?,
        _ => ron::from_str(&content)
            .with_context(|| format!("parsing {} as RON", path.display()))?,
    };
    validate_tables(&tables)?;
    Ok(PacingTables::with_tables(tables))
}

/// Every supplied table must be non-empty and non-decreasing
fn validate_tables(tables: &HashMap<Pacing, Vec<i64>>) -> Result<(), DataError> {
    for (&pacing, table) in tables {
        if table.is_empty() {
            return Err(DataError::EmptyTable(pacing.name()));
        }
        for (i, pair) in table.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(DataError::NotMonotonic(pacing.name(), i + 2));
            }
        }
    }
    Ok(())
}
