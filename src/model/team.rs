//! Normalized team records and the directory that holds them.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{error::RankingsError, Result, TeamId};

/// Image shown for teams without a logo of their own.
pub const PLACEHOLDER_LOGO: &str = "https://via.placeholder.com/40";

/// A team as every view sees it. Only its position changes after import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Team {
    pub fn new(id: i64, name: impl Into<String>, logo: Option<String>) -> Self {
        Self {
            id: TeamId::new(id),
            name: name.into(),
            logo,
        }
    }

    /// Logo to render, falling back to the placeholder image.
    pub fn logo_or_placeholder(&self) -> &str {
        self.logo.as_deref().unwrap_or(PLACEHOLDER_LOGO)
    }
}

/// The imported set of teams, in import order.
///
/// Replaced wholesale by every import; never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamDirectory {
    teams: Vec<Team>,
}

impl TeamDirectory {
    /// Build a directory, rejecting duplicate ids.
    pub fn new(teams: Vec<Team>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(teams.len());
        for team in &teams {
            if !seen.insert(team.id) {
                return Err(RankingsError::malformed(format!(
                    "duplicate team id {}",
                    team.id
                )));
            }
        }
        Ok(Self { teams })
    }

    /// Parse pasted text in the `[{"id":1,"name":"Team A","logo":"url"}]` shape.
    pub fn from_json(input: &str) -> Result<Self> {
        let teams: Vec<Team> =
            serde_json::from_str(input).map_err(|e| RankingsError::malformed(e.to_string()))?;
        Self::new(teams)
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

    pub fn contains(&self, id: TeamId) -> bool {
        self.teams.iter().any(|t| t.id == id)
    }

    pub fn get(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }
}
