//! Encounter award orchestration
//!
//! Turns a party roster plus a final encounter level into per-character
//! XP grants under the configured award method.

use serde::{Deserialize, Serialize};

use super::mode::AwardMode;
use super::pot30::{get_pot30, split30};
use super::raw35::award_raw35;

/// One party slot as the host supplies it.
///
/// Identity (actor ids, names, portraits) stays in the host; only the
/// level and whether the member earns a share matter here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PartyMember {
    /// Effective character level for reward lookups
    pub level: i32,
    /// Whether this member earns a share of the encounter XP
    pub earns: bool,
}

impl PartyMember {
    pub fn earner(level: i32) -> Self {
        Self { level, earns: true }
    }

    pub fn bystander(level: i32) -> Self {
        Self { level, earns: false }
    }
}

/// One character's XP for one encounter, never negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpGrant {
    /// Index into the party slice this grant belongs to
    pub member: usize,
    /// XP amount
    pub xp: i64,
}

/// Rounded mean level across the whole party, earners or not
pub fn average_party_level(party: &[PartyMember]) -> i32 {
    let total: i32 = party.iter().map(|p| p.level).sum();
    (f64::from(total) / party.len().max(1) as f64).round() as i32
}

/// Compute every earner's grant for an encounter at `el`.
///
/// A non-positive EL or a party with no earners yields no grants.
pub fn award_encounter(party: &[PartyMember], el: f64, mode: AwardMode) -> Vec<XpGrant> {
    if el <= 0.0 || !party.iter().any(|p| p.earns) {
        return Vec::new();
    }
    match mode {
        AwardMode::Raw35 => party
            .iter()
            .enumerate()
            .filter(|(_, p)| p.earns)
            .map(|(i, p)| XpGrant {
                member: i,
                xp: award_raw35(p.level, el),
            })
            .collect(),
        AwardMode::Split30 => {
            // APL averages over everyone present; only earners split the pot
            let apl = average_party_level(party);
            let earners = party.iter().filter(|p| p.earns).count();
            let pot = get_pot30(apl, el.floor() as i32);
            let slice = split30(pot, 1.0, earners as f64);
            party
                .iter()
                .enumerate()
                .filter(|(_, p)| p.earns)
                .map(|(i, _)| XpGrant { member: i, xp: slice })
                .collect()
        }
    }
}
