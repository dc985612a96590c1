//! Manual award units
//!
//! GMs hand out story XP either as raw points or as "segments", fractions
//! of the current level's span. This converts both into whole XP via the
//! progression provider.

use serde::{Deserialize, Serialize};

use super::pacing::ProgressionProvider;

/// Display segments per character level
pub const SEGMENTS_PER_LEVEL: f64 = 13.0 + 1.0 / 3.0;

/// XP span between `level` and the next one, never below 1
pub fn level_span(provider: &dyn ProgressionProvider, level: i32) -> i64 {
    let start = provider.total_xp_for_level(level);
    let next = provider.total_xp_for_level(level + 1);
    (next - start).max(1)
}

/// Size of one segment for a character of `level`
pub fn segment_size(provider: &dyn ProgressionProvider, level: i32) -> f64 {
    level_span(provider, level) as f64 / SEGMENTS_PER_LEVEL
}

/// How a manual award amount is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManualUnit {
    #[default]
    Points,
    Segments,
}

/// Convert a manual award into whole XP for a character of `level`
pub fn manual_award_xp(
    provider: &dyn ProgressionProvider,
    level: i32,
    amount: f64,
    unit: ManualUnit,
) -> i64 {
    let xp = match unit {
        ManualUnit::Points => amount,
        ManualUnit::Segments => amount * segment_size(provider, level),
    };
    xp.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::QuadraticProgression;

    #[test]
    fn test_level_span() {
        let q = QuadraticProgression;
        assert_eq!(level_span(&q, 1), 1000);
        assert_eq!(level_span(&q, 5), 5000);
    }

    #[test]
    fn test_segment_size() {
        let q = QuadraticProgression;
        // 1000 / (40/3) = 75 exactly
        assert_eq!(segment_size(&q, 1), 75.0);
    }

    #[test]
    fn test_manual_points_pass_through() {
        let q = QuadraticProgression;
        assert_eq!(manual_award_xp(&q, 5, 250.0, ManualUnit::Points), 250);
        assert_eq!(manual_award_xp(&q, 5, 250.4, ManualUnit::Points), 250);
    }

    #[test]
    fn test_manual_segments_convert() {
        let q = QuadraticProgression;
        assert_eq!(manual_award_xp(&q, 1, 4.0, ManualUnit::Segments), 300);
        // A full bar of segments is one level span
        assert_eq!(
            manual_award_xp(&q, 1, SEGMENTS_PER_LEVEL, ManualUnit::Segments),
            1000
        );
    }

    #[test]
    fn test_span_floor() {
        // A flat table still yields a span of at least 1
        struct Flat;
        impl ProgressionProvider for Flat {
            fn total_xp_for_level(&self, _level: i32) -> i64 {
                5000
            }
        }
        assert_eq!(level_span(&Flat, 9), 1);
    }
}
