//! Reorderable views over the team directory.
//!
//! - `drag`: drop results and the shared move primitive
//! - `ranking`: the single ordered power ranking
//! - `tiers`: the tier board with its reserved unassigned bucket

pub mod drag;
pub mod ranking;
pub mod tiers;

pub use drag::{DragResult, Slot};
pub use ranking::RankingList;
pub use tiers::TierBoard;
