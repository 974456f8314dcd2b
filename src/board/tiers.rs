//! Tier board: every team sits in exactly one ordered bucket.
//!
//! The board keeps two pieces of state, persisted separately:
//! - the ordered tier metadata (`tierNames`)
//! - the tier id → teams mapping (`tieredTeams`)
//!
//! The unassigned bucket is always present and always displayed last.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use super::drag::{move_within, DragResult};
use crate::{
    error::RankingsError,
    model::{
        default_tiers,
        tier::{is_unassigned, NEW_TIER_COLOR},
        Team, TeamDirectory, Tier, UNASSIGNED_TIER_ID,
    },
    Result, TeamId, TierId,
};

#[cfg(test)]
mod tests;

/// Tier id → ordered teams, the `tieredTeams` document.
pub type TierBuckets = BTreeMap<TierId, Vec<Team>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierBoard {
    tiers: Vec<Tier>,
    buckets: TierBuckets,
}

impl Default for TierBoard {
    fn default() -> Self {
        let tiers = default_tiers();
        let buckets = tiers.iter().map(|t| (t.id.clone(), Vec::new())).collect();
        Self { tiers, buckets }
    }
}

impl TierBoard {
    /// Rebuild a board from persisted parts, restoring its invariants.
    ///
    /// Missing metadata falls back to the default tiers. The unassigned tier is
    /// re-added if absent and moved to the end. Buckets without metadata are
    /// folded into unassigned, and a team found in several buckets keeps only
    /// its first placement in display order.
    pub fn from_parts(tiers: Option<Vec<Tier>>, buckets: Option<TierBuckets>) -> Self {
        let mut tiers = tiers.unwrap_or_else(default_tiers);
        let mut buckets = buckets.unwrap_or_default();

        let mut seen_tiers = HashSet::new();
        tiers.retain(|t| seen_tiers.insert(t.id.clone()));

        let unassigned = match tiers.iter().position(Tier::is_unassigned) {
            Some(pos) => {
                let mut tier = tiers.remove(pos);
                tier.label = Tier::unassigned().label;
                tier
            }
            None => Tier::unassigned(),
        };
        tiers.push(unassigned);

        let known: HashSet<TierId> = tiers.iter().map(|t| t.id.clone()).collect();
        let orphans: Vec<TierId> = buckets
            .keys()
            .filter(|id| !known.contains(*id))
            .cloned()
            .collect();

        let mut ordered: TierBuckets = BTreeMap::new();
        let mut placed = HashSet::new();
        let display_order = tiers.iter().map(|t| t.id.clone()).chain(orphans.iter().cloned());
        for id in display_order {
            let teams = buckets.remove(&id).unwrap_or_default();
            let target = if known.contains(&id) {
                id
            } else {
                warn!(tier = %id, "Folding teams of unknown tier into unassigned");
                TierId::new(UNASSIGNED_TIER_ID)
            };
            let bucket = ordered.entry(target).or_default();
            for team in teams {
                if placed.insert(team.id) {
                    bucket.push(team);
                } else {
                    warn!(team = %team.id, "Dropping duplicate tier placement");
                }
            }
        }
        for tier in &tiers {
            ordered.entry(tier.id.clone()).or_default();
        }

        Self {
            tiers,
            buckets: ordered,
        }
    }

    /// Tier metadata in display order; unassigned is last.
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn buckets(&self) -> &TierBuckets {
        &self.buckets
    }

    pub fn tier(&self, id: &TierId) -> Option<&Tier> {
        self.tiers.iter().find(|t| &t.id == id)
    }

    /// Teams in one tier, in order. Empty for unknown ids.
    pub fn teams_in(&self, id: &TierId) -> &[Team] {
        self.buckets.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn unassigned(&self) -> &[Team] {
        self.teams_in(&TierId::new(UNASSIGNED_TIER_ID))
    }

    pub fn total_teams(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// The tier a team currently sits in.
    pub fn tier_of(&self, team: TeamId) -> Option<&TierId> {
        self.buckets
            .iter()
            .find(|(_, teams)| teams.iter().any(|t| t.id == team))
            .map(|(id, _)| id)
    }

    /// Apply a drop, within one tier or across two.
    ///
    /// Returns `false` when the drop had no destination. Unknown tiers and
    /// out-of-range source indices fail and leave the board unchanged.
    pub fn apply_drag(&mut self, drag: &DragResult) -> Result<bool> {
        let Some(destination) = &drag.destination else {
            return Ok(false);
        };
        let source = &drag.source;
        self.require_bucket(&source.tier)?;
        self.require_bucket(&destination.tier)?;

        if source.tier == destination.tier {
            let bucket = self.bucket_mut(&source.tier)?;
            move_within(bucket, source.index, destination.index)?;
            return Ok(true);
        }

        let from = self.bucket_mut(&source.tier)?;
        if source.index >= from.len() {
            return Err(RankingsError::InvalidPosition {
                index: source.index,
                len: from.len(),
            });
        }
        let moved = from.remove(source.index);
        debug!(team = %moved.id, from = %source.tier, to = %destination.tier, "Moving team across tiers");

        let to = self.bucket_mut(&destination.tier)?;
        let index = destination.index.min(to.len());
        to.insert(index, moved);
        Ok(true)
    }

    /// Relabel a tier. The unassigned tier and unknown ids are left alone.
    pub fn rename(&mut self, id: &TierId, label: impl Into<String>) -> bool {
        if is_unassigned(id) {
            return false;
        }
        match self.tiers.iter_mut().find(|t| &t.id == id) {
            Some(tier) => {
                tier.label = label.into();
                true
            }
            None => false,
        }
    }

    /// Add an empty tier just above the unassigned bucket.
    pub fn add_tier(&mut self) -> TierId {
        let mut n = self.tiers.len() + 1;
        while self.tier(&TierId::new(format!("tier-{n}"))).is_some()
            || self.buckets.contains_key(&TierId::new(format!("tier-{n}")))
        {
            n += 1;
        }
        let tier = Tier::new(format!("tier-{n}"), format!("Tier {n}"), NEW_TIER_COLOR);
        let id = tier.id.clone();

        let at = self
            .tiers
            .iter()
            .position(Tier::is_unassigned)
            .unwrap_or(self.tiers.len());
        self.tiers.insert(at, tier);
        self.buckets.insert(id.clone(), Vec::new());
        id
    }

    /// Remove a tier, sending its teams to the end of unassigned in order.
    pub fn delete_tier(&mut self, id: &TierId) -> bool {
        if is_unassigned(id) {
            return false;
        }
        let Some(pos) = self.tiers.iter().position(|t| &t.id == id) else {
            return false;
        };
        self.tiers.remove(pos);
        let moved = self.buckets.remove(id).unwrap_or_default();
        self.buckets
            .entry(TierId::new(UNASSIGNED_TIER_ID))
            .or_default()
            .extend(moved);
        true
    }

    /// Bring the board in line with a freshly replaced directory.
    ///
    /// Teams no longer in the directory are dropped, placed teams take the
    /// directory's record, and unplaced teams are appended to unassigned in
    /// directory order. Running it again without a directory change does
    /// nothing. Returns whether anything changed.
    pub fn reconcile(&mut self, directory: &TeamDirectory) -> bool {
        let before = self.buckets.clone();

        for bucket in self.buckets.values_mut() {
            bucket.retain(|t| directory.contains(t.id));
            for team in bucket.iter_mut() {
                if let Some(current) = directory.get(team.id) {
                    if *current != *team {
                        *team = current.clone();
                    }
                }
            }
        }

        let placed: HashSet<TeamId> = self
            .buckets
            .values()
            .flat_map(|teams| teams.iter().map(|t| t.id))
            .collect();
        let unassigned = self
            .buckets
            .entry(TierId::new(UNASSIGNED_TIER_ID))
            .or_default();
        for team in directory.teams() {
            if !placed.contains(&team.id) {
                unassigned.push(team.clone());
            }
        }

        self.buckets != before
    }

    fn require_bucket(&self, id: &TierId) -> Result<()> {
        if self.buckets.contains_key(id) {
            Ok(())
        } else {
            Err(RankingsError::UnknownTier { id: id.to_string() })
        }
    }

    fn bucket_mut(&mut self, id: &TierId) -> Result<&mut Vec<Team>> {
        self.buckets
            .get_mut(id)
            .ok_or_else(|| RankingsError::UnknownTier { id: id.to_string() })
    }
}
