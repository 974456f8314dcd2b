//! Drop results as a UI reports them, independent of any UI toolkit.

use crate::{error::RankingsError, Result, TierId};

/// A position inside one tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub tier: TierId,
    pub index: usize,
}

impl Slot {
    pub fn new(tier: impl Into<TierId>, index: usize) -> Self {
        Self {
            tier: tier.into(),
            index,
        }
    }
}

/// Where a drag started and where it was released, if anywhere valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragResult {
    pub source: Slot,
    pub destination: Option<Slot>,
}

impl DragResult {
    pub fn new(source: Slot, destination: Slot) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    /// A drag released outside every drop target.
    pub fn cancelled(source: Slot) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}

/// Remove the item at `from` and reinsert it at `to`.
///
/// `to` past the end lands at the end. Fails without touching `items` when
/// `from` is out of range.
pub fn move_within<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<()> {
    if from >= items.len() {
        return Err(RankingsError::InvalidPosition {
            index: from,
            len: items.len(),
        });
    }
    let moved = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, moved);
    Ok(())
}
