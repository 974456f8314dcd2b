//! The power ranking: one ordered list holding every team once.

use serde::{Deserialize, Serialize};

use super::drag::move_within;
use crate::{model::Team, model::TeamDirectory, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankingList {
    teams: Vec<Team>,
}

impl RankingList {
    /// Rank teams in directory order.
    pub fn from_directory(directory: &TeamDirectory) -> Self {
        Self {
            teams: directory.teams().to_vec(),
        }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// 1-based rank of a team.
    pub fn rank_of(&self, id: crate::TeamId) -> Option<usize> {
        self.teams.iter().position(|t| t.id == id).map(|i| i + 1)
    }

    /// Apply a drop. Returns `false` when there was no destination.
    pub fn reorder(&mut self, source: usize, destination: Option<usize>) -> Result<bool> {
        let Some(destination) = destination else {
            return Ok(false);
        };
        move_within(&mut self.teams, source, destination)?;
        Ok(true)
    }
}
