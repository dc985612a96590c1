//! XP award methods
//!
//! The per-character 3.5e calculator, the 3.0 split-pot table, and the
//! orchestration that turns a party plus an encounter level into grants.

pub mod grants;
pub mod mode;
pub mod pot30;
pub mod raw35;

pub use grants::{average_party_level, award_encounter, PartyMember, XpGrant};
pub use mode::AwardMode;
pub use pot30::{base_pot30, get_pot30, split30};
pub use raw35::award_raw35;
