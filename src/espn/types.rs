use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{Team, PLACEHOLDER_LOGO};
use crate::Result;

/// Error text for a league that came back without teams.
pub const NO_TEAMS_MESSAGE: &str = "No teams found (maybe private league?)";

/// The slice of an ESPN league document we read.
#[derive(Debug, Clone, Deserialize)]
pub struct EspnLeague {
    #[serde(default)]
    pub teams: Vec<EspnTeam>,
}

/// One upstream team. Every naming field is optional across seasons and views.
#[derive(Debug, Clone, Deserialize)]
pub struct EspnTeam {
    pub id: i64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

impl EspnTeam {
    /// `"<location> <nickname>"` trimmed, then upstream `name`, then `Team {id}`.
    pub fn display_name(&self) -> String {
        let joined = format!(
            "{} {}",
            self.location.as_deref().unwrap_or_default(),
            self.nickname.as_deref().unwrap_or_default()
        );
        let joined = joined.trim();
        if !joined.is_empty() {
            return joined.to_string();
        }
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Team {}", self.id))
    }

    pub fn into_team(self) -> Team {
        let name = self.display_name();
        let logo = self
            .logo
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER_LOGO.to_string());
        Team::new(self.id, name, Some(logo))
    }
}

/// Map a raw league document to teams in upstream order.
pub fn teams_from_league(payload: Value) -> Result<Vec<Team>> {
    let league: EspnLeague = serde_json::from_value(payload)?;
    Ok(league.teams.into_iter().map(EspnTeam::into_team).collect())
}

/// Successful proxy body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamsResponse {
    pub teams: Vec<Team>,
}

/// Failing proxy body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
