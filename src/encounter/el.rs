//! Encounter Level aggregation
//!
//! Folds monster Challenge Ratings into a single Encounter Level using the
//! published doubling and pairwise-combination rules.

/// Smallest CR a single monster can contribute
pub const MIN_CR: f64 = 0.125;

/// Sentinel meaning "no valid encounter"
pub const NO_ENCOUNTER: f64 = f64::NEG_INFINITY;

/// Effective EL of `count` monsters sharing one CR.
///
/// Doubling the number of same-CR monsters raises the group's effective
/// level by 2. The halving loop applies that step for any count, so a
/// group of 3 gets the same single +2 as a group of 2.
pub fn group_to_el(cr: f64, count: i32) -> f64 {
    if count <= 0 {
        return NO_ENCOUNTER;
    }
    let mut el = cr;
    let mut k = count;
    while k >= 2 {
        el += 2.0;
        k /= 2;
    }
    el
}

/// Combine per-group ELs into one encounter EL.
///
/// Repeatedly merges the two largest remaining values: equal ELs give +2,
/// a partner 1-7 below gives +1, and anything 8 or more below is too weak
/// to matter. The re-sort after every merge is load-bearing: a merge can
/// produce a new largest value that pairs differently with the rest.
pub fn combine_els(els: &[f64]) -> f64 {
    if els.is_empty() {
        return NO_ENCOUNTER;
    }
    let mut arr = els.to_vec();
    while arr.len() > 1 {
        arr.sort_by(f64::total_cmp);
        let a = arr.pop().unwrap_or(NO_ENCOUNTER); // largest
        let b = arr.pop().unwrap_or(NO_ENCOUNTER); // second largest
        let diff = a - b;
        let combined = if diff == 0.0 {
            a + 2.0
        } else if (1.0..=7.0).contains(&diff) {
            a + 1.0
        } else {
            // 8+ below: negligible
            a
        };
        arr.push(combined);
    }
    arr[0]
}

/// Monsters grouped by shared CR.
///
/// Fractional CRs (1/8, 1/4, 1/3, 1/2, ...) are kept distinct; an invalid
/// rating defaults to CR 1 and anything below 1/8 is bumped up to it.
#[derive(Debug, Clone, Default)]
pub struct EnemyGroups {
    groups: Vec<(f64, i32)>,
}

impl EnemyGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build groups from a stream of per-monster CRs
    pub fn from_crs(crs: impl IntoIterator<Item = f64>) -> Self {
        let mut groups = Self::new();
        for cr in crs {
            groups.add(cr);
        }
        groups
    }

    /// Add one monster by CR
    pub fn add(&mut self, cr: f64) {
        self.add_many(cr, 1);
    }

    /// Add `count` monsters sharing one CR
    pub fn add_many(&mut self, cr: f64, count: i32) {
        if count <= 0 {
            return;
        }
        let cr = sanitize_cr(cr);
        if let Some(group) = self.groups.iter_mut().find(|(c, _)| *c == cr) {
            group.1 += count;
        } else {
            self.groups.push((cr, count));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of monsters across all groups
    pub fn monster_count(&self) -> i32 {
        self.groups.iter().map(|(_, n)| n).sum()
    }

    /// Distinct (CR, count) groups in insertion order
    pub fn groups(&self) -> &[(f64, i32)] {
        &self.groups
    }

    /// One EL per distinct CR group
    pub fn group_els(&self) -> Vec<f64> {
        self.groups
            .iter()
            .map(|&(cr, count)| group_to_el(cr, count))
            .collect()
    }

    /// Combined EL of all groups, or the sentinel when empty
    pub fn encounter_level(&self) -> f64 {
        combine_els(&self.group_els())
    }
}

/// A staged encounter: grouped enemies plus a manual EL adjustment
#[derive(Debug, Clone, Default)]
pub struct Encounter {
    pub groups: EnemyGroups,
    /// Integer EL modifier applied on top of the computed value
    pub el_delta: i32,
}

impl Encounter {
    pub fn new(groups: EnemyGroups) -> Self {
        Self { groups, el_delta: 0 }
    }

    /// Final EL after the manual delta; `None` with no monsters staged
    pub fn encounter_level(&self) -> Option<f64> {
        if self.groups.is_empty() {
            None
        } else {
            Some(self.groups.encounter_level() + self.el_delta as f64)
        }
    }
}

/// Invalid or zero ratings default to 1, anything below 1/8 becomes 1/8
fn sanitize_cr(cr: f64) -> f64 {
    if !cr.is_finite() || cr == 0.0 {
        1.0
    } else {
        cr.max(MIN_CR)
    }
}
