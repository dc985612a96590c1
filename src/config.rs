//! Engine configuration
//!
//! Settings the host passes explicitly into the award pipeline. Loaded
//! from a RON file when present, with defaults otherwise; never read from
//! ambient global state.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::awards::AwardMode;
use crate::progression::Pacing;

/// Award pipeline settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Which award method converts (level, EL) pairs into XP
    pub award_mode: AwardMode,
    /// Reward pacing profile for progression lookups
    pub pacing: Pacing,
}

impl EngineConfig {
    /// Load from a RON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match ron::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        log::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e)
                    }
                },
                Err(e) => log::warn!("Failed to read {}: {}. Using defaults.", path.display(), e),
            }
        }
        Self::default()
    }
}
