//! ID types for fantasy leagues, teams and tiers.

use crate::error::{RankingsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// League identifier as the upstream platform hands it out.
///
/// Sleeper ids are 18+ digit strings and ESPN ids are small integers, so the
/// value is kept as text. An empty id is never constructed.
///
/// # Examples
///
/// ```rust
/// use power_rankings::LeagueId;
///
/// let league_id: LeagueId = " 123456 ".parse().unwrap();
/// assert_eq!(league_id.as_str(), "123456");
/// assert!("".parse::<LeagueId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueId(String);

impl LeagueId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = RankingsError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(RankingsError::MissingParameter {
                what: "League ID".to_string(),
                env_var: "--league-id".to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Team id, unique within one directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub i64);

impl TeamId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable key of a tier. Labels change, ids do not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierId(String);

impl TierId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TierId {
    type Err = RankingsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().to_string()))
    }
}

impl From<String> for TierId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TierId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_id_trims_whitespace() {
        let id: LeagueId = "  1048264577340092416\n".parse().unwrap();
        assert_eq!(id.as_str(), "1048264577340092416");
        assert_eq!(id.to_string(), "1048264577340092416");
    }

    #[test]
    fn test_league_id_rejects_blank() {
        for input in ["", "   ", "\t"] {
            match input.parse::<LeagueId>() {
                Err(RankingsError::MissingParameter { .. }) => (),
                other => panic!("Expected MissingParameter for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_team_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&TeamId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: TeamId = serde_json::from_str("7").unwrap();
        assert_eq!(back, TeamId::new(7));
    }

    #[test]
    fn test_tier_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&TierId::from("tier-1")).unwrap();
        assert_eq!(json, "\"tier-1\"");
    }
}
