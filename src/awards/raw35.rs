//! Individual XP awards, 3.5e rules
//!
//! Per-character award for one encounter, matching the published
//! per-level table: a closed-form estimate corrected by exact anchor
//! values at specific (level, EL) combinations.

/// Published anchor rows: (pc level, anchor EL, base award).
///
/// The base applies at the anchor EL and doubles for every +2 EL above it.
/// The first even row covers every level at or below 3.
const EVEN_EL_ANCHORS: &[(i32, i32, i64)] = &[
    (3, 4, 1350),
    (5, 6, 2250),
    (7, 8, 3150),
    (9, 10, 4050),
    (11, 12, 4950),
    (13, 14, 5850),
    (15, 16, 6750),
    (17, 18, 7650),
    (19, 20, 8550),
];

const ODD_EL_ANCHORS: &[(i32, i32, i64)] = &[
    (6, 7, 2700),
    (8, 9, 3600),
    (10, 11, 4500),
    (12, 13, 5400),
    (14, 15, 6300),
    (16, 17, 7200),
    (18, 19, 8100),
];

/// One character's XP for one encounter.
///
/// Total over its whole domain: invalid or out-of-band inputs yield 0,
/// never an error. Levels below 3 use level-3 math; encounters more than
/// 7 levels away in either direction award nothing; ELs above 20 double
/// the award of the EL two lower.
pub fn award_raw35(pc_level: i32, encounter_level: f64) -> i64 {
    let y = encounter_level;
    if pc_level <= 0 || y <= 0.0 {
        return 0;
    }

    // Low-level PCs are scored as level 3
    let x = pc_level.max(3);
    let xf = x as f64;

    let mut xp = if (x <= 6 && y <= 1.0) || y < 1.0 {
        // Baseline 300 XP at EL 1, scaled linearly for fractional ELs
        300.0 * y
    } else {
        let diff = xf - y;
        let me = m_even(7.0 - diff);
        6.25 * xf * (me / 2.0).exp2() * (11.0 - diff - me)
    };

    // Exact published values override the estimate at anchored ELs
    if let Some(anchor) = anchor_award(x, y) {
        xp = anchor;
    }

    // Past the table, every +2 EL doubles the award
    if y > 20.0 {
        xp = 2.0 * award_raw35(x, y - 2.0) as f64;
    }

    // No XP when the gap exceeds 7: too trivial below, too lethal above
    if xf - y > 7.0 || y - xf > 7.0 {
        xp = 0.0;
    }

    xp.round() as i64
}

/// Round to the even grid, biased outward from the floor
fn m_even(val: f64) -> f64 {
    let mut result = 2.0 * (val / 2.0).floor();
    if val < result {
        result -= 2.0;
    } else if val > result {
        result += 2.0;
    }
    result
}

/// Anchor award for an exact even EL 4-20 or odd EL 7-19, if one applies
fn anchor_award(level: i32, el: f64) -> Option<f64> {
    if el.fract() != 0.0 {
        return None;
    }
    let el = el as i32;
    let table = if (4..=20).contains(&el) && el % 2 == 0 {
        EVEN_EL_ANCHORS
    } else if (7..=19).contains(&el) && el % 2 == 1 {
        ODD_EL_ANCHORS
    } else {
        return None;
    };
    for &(row_level, anchor_el, base) in table {
        let applies = if row_level == 3 { level <= 3 } else { level == row_level };
        if applies && el >= anchor_el {
            return Some(base as f64 * (((el - anchor_el) as f64) / 2.0).exp2());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_invalid_inputs_award_nothing() {
        assert_eq!(award_raw35(0, 5.0), 0);
        assert_eq!(award_raw35(-3, 5.0), 0);
        assert_eq!(award_raw35(5, 0.0), 0);
        assert_eq!(award_raw35(5, -1.0), 0);
    }

    #[test]
    fn test_equal_level_diagonal() {
        // The published table awards 300 x level when EL matches the level
        for level in 3..=20 {
            assert_eq!(award_raw35(level, level as f64), 300 * level as i64, "level {}", level);
        }
    }

    #[test]
    fn test_low_level_clamp() {
        // Levels 1 and 2 use level-3 math
        assert_eq!(award_raw35(1, 4.0), award_raw35(3, 4.0));
        assert_eq!(award_raw35(2, 9.0), award_raw35(3, 9.0));
    }

    #[test]
    fn test_fractional_el_scales_linearly() {
        assert_eq!(award_raw35(4, 0.5), 150);
        assert_eq!(award_raw35(1, 0.25), 75);
        assert_eq!(award_raw35(7, 0.5), 150); // fractional EL path above level 6
        assert_eq!(award_raw35(2, 1.0), 300);
        // The band clamp still applies after the fractional branch
        assert_eq!(award_raw35(10, 0.5), 0);
    }

    #[test]
    fn test_even_el_anchors() {
        assert_eq!(award_raw35(3, 4.0), 1350);
        assert_eq!(award_raw35(3, 6.0), 2700); // 1350 doubled at +2 EL
        assert_eq!(award_raw35(5, 6.0), 2250);
        assert_eq!(award_raw35(7, 8.0), 3150);
        assert_eq!(award_raw35(9, 10.0), 4050);
        assert_eq!(award_raw35(19, 20.0), 8550);
    }

    #[test]
    fn test_odd_el_anchors() {
        assert_eq!(award_raw35(6, 7.0), 2700);
        assert_eq!(award_raw35(8, 9.0), 3600);
        assert_eq!(award_raw35(10, 11.0), 4500);
        assert_eq!(award_raw35(18, 19.0), 8100);
        assert_eq!(award_raw35(10, 13.0), 4500 * 2); // +2 EL above the anchor
    }

    #[test]
    fn test_anchor_needs_el_at_or_above() {
        // Level 5 below its EL-6 anchor falls back to the closed form
        assert_eq!(award_raw35(5, 4.0), 1000);
        // Level 5 vs EL 7 is off the anchor grid entirely
        assert_eq!(award_raw35(5, 7.0), 3000);
    }

    #[test]
    fn test_band_clamp() {
        assert_eq!(award_raw35(12, 4.0), 0); // 8 below: trivial
        assert_eq!(award_raw35(5, 13.0), 0); // 8 above: lethal
        assert!(award_raw35(12, 5.0) > 0); // 7 below still awards
        assert!(award_raw35(5, 12.0) > 0); // 7 above still awards
    }

    #[test]
    fn test_band_clamp_sampled() {
        let mut rng = rand::thread_rng();
        for _ in 0..2000 {
            let level: i32 = rng.gen_range(1..=30);
            let el = rng.gen_range(1..=40) as f64;
            let clamped = level.max(3) as f64;
            if (clamped - el).abs() > 7.0 {
                assert_eq!(award_raw35(level, el), 0, "level {} vs EL {}", level, el);
            } else {
                assert!(award_raw35(level, el) >= 0, "level {} vs EL {}", level, el);
            }
        }
    }

    #[test]
    fn test_high_el_doubling_law() {
        for level in 14..=30 {
            for el in 21..=30 {
                let elf = el as f64;
                let doubled = award_raw35(level, elf + 2.0);
                if elf + 2.0 - level as f64 > 7.0 {
                    // Doubling never resurrects an award past the lethal edge
                    assert_eq!(doubled, 0, "level {} at EL {}", level, el + 2);
                } else {
                    assert_eq!(
                        doubled,
                        2 * award_raw35(level, elf),
                        "level {} at EL {}",
                        level,
                        el
                    );
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let first = award_raw35(10, 10.0);
        assert!(first > 0);
        for _ in 0..10 {
            assert_eq!(award_raw35(10, 10.0), first);
        }
    }
}
