//! Level progression and manual award units

pub mod pacing;
pub mod segments;

pub use pacing::{Pacing, PacingTables, ProgressionProvider, QuadraticProgression};
pub use segments::{level_span, manual_award_xp, segment_size, ManualUnit, SEGMENTS_PER_LEVEL};
