//! Tier metadata: the buckets of the tier board.

use serde::{Deserialize, Serialize};

use crate::TierId;

/// Id of the catch-all bucket. It is never renamed or deleted.
pub const UNASSIGNED_TIER_ID: &str = "unassigned";

/// Color tag given to tiers created after first run.
pub const NEW_TIER_COLOR: &str = "purple";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub id: TierId,
    pub label: String,
    pub color: String,
}

impl Tier {
    pub fn new(id: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: TierId::new(id),
            label: label.into(),
            color: color.into(),
        }
    }

    pub fn unassigned() -> Self {
        Self::new(UNASSIGNED_TIER_ID, "Unassigned", "gray")
    }

    pub fn is_unassigned(&self) -> bool {
        is_unassigned(&self.id)
    }
}

pub fn is_unassigned(id: &TierId) -> bool {
    id.as_str() == UNASSIGNED_TIER_ID
}

/// First-run tiers S through F, followed by the unassigned bucket.
pub fn default_tiers() -> Vec<Tier> {
    vec![
        Tier::new("tier-1", "S", "red"),
        Tier::new("tier-2", "A", "orange"),
        Tier::new("tier-3", "B", "yellow"),
        Tier::new("tier-4", "C", "green"),
        Tier::new("tier-5", "D", "blue"),
        Tier::new("tier-6", "F", "gray"),
        Tier::unassigned(),
    ]
}
