//! Encounter assembly
//!
//! Groups monsters by Challenge Rating, aggregates them to an Encounter
//! Level, and rates the result against the party.

pub mod difficulty;
pub mod el;

pub use difficulty::{cr_to_power, party_power_level, power_to_level, rate_encounter, DifficultyRating};
pub use el::{combine_els, group_to_el, Encounter, EnemyGroups, MIN_CR, NO_ENCOUNTER};
