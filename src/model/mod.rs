//! Team and tier records shared by every view.

pub mod team;
pub mod tier;

pub use team::{Team, TeamDirectory, PLACEHOLDER_LOGO};
pub use tier::{default_tiers, Tier, UNASSIGNED_TIER_ID};
