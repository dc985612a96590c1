//! Westmarch XP - encounter difficulty and experience awards for d20 campaigns
//!
//! Aggregates monster Challenge Ratings into an Encounter Level, then
//! turns (character level, EL) pairs into XP grants under either the 3.5e
//! per-character method or the classic 3.0 split-pot method.

pub mod awards;
pub mod config;
pub mod data;
pub mod encounter;
pub mod progression;

// Re-export commonly used types
pub use awards::{award_encounter, award_raw35, get_pot30, split30, AwardMode, PartyMember, XpGrant};
pub use config::EngineConfig;
pub use encounter::{combine_els, group_to_el, Encounter, EnemyGroups};
pub use progression::{Pacing, PacingTables, ProgressionProvider, QuadraticProgression};
