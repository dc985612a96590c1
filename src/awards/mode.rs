//! Award method selection

use serde::{Deserialize, Serialize};

/// Which published method converts (level, EL) pairs into XP.
///
/// The two methods are mutually exclusive; the host's configuration picks
/// one for the whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AwardMode {
    /// 3.5e individual awards: each character's level against the encounter EL
    #[default]
    Raw35,
    /// 3.0 split pot: one party pot by APL, divided evenly among earners
    Split30,
}

impl AwardMode {
    pub fn name(&self) -> &'static str {
        match self {
            AwardMode::Raw35 => "3.5e (Individual XP)",
            AwardMode::Split30 => "3.0 (split pot by APL)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_raw() {
        assert_eq!(AwardMode::default(), AwardMode::Raw35);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&AwardMode::Raw35).unwrap(), "\"raw35\"");
        assert_eq!(serde_json::to_string(&AwardMode::Split30).unwrap(), "\"split30\"");
    }
}
