//! Type-safe wrappers for league, team and tier identifiers.

pub mod ids;
pub mod time;

pub use ids::{LeagueId, TeamId, TierId};
pub use time::Season;
