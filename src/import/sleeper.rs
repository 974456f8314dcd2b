//! Sleeper league import.
//!
//! Sleeper exposes rosters and users as two separate lists. Rosters carry the
//! team; users carry the owner's display name and avatar. They are joined on
//! `owner_id == user_id`.

use std::collections::BTreeMap;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    error::RankingsError,
    model::{Team, TeamDirectory, PLACEHOLDER_LOGO},
    LeagueId, Result,
};


/// Base path for Sleeper's v1 API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Avatar CDN, keyed by avatar id.
pub const SLEEPER_AVATAR_BASE_URL: &str = "https://sleepercdn.com/avatars";

const PLATFORM: &str = "Sleeper";

#[derive(Debug, Clone, Deserialize)]
pub struct SleeperUser {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SleeperRoster {
    pub roster_id: i64,
    #[serde(default)]
    pub owner_id: Option<String>,
    /// Free-form per-roster settings; values are usually strings.
    #[serde(default)]
    pub metadata: Option<BTreeMap<String, Value>>,
}

impl SleeperRoster {
    fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata
            .as_ref()?
            .get(key)?
            .as_str()
            .filter(|s| !s.is_empty())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Join rosters with their owners, one team per roster in roster order.
///
/// Name: custom team name, else owner display name, else `Team {n}` (1-based).
/// Logo: custom team logo, else owner avatar, else the placeholder image.
pub fn teams_from_rosters(rosters: &[SleeperRoster], users: &[SleeperUser]) -> Vec<Team> {
    rosters
        .iter()
        .enumerate()
        .map(|(idx, roster)| {
            let owner = roster
                .owner_id
                .as_deref()
                .and_then(|owner_id| users.iter().find(|u| u.user_id == owner_id));

            let name = roster
                .metadata_str("team_name")
                .or_else(|| owner.and_then(|u| non_empty(&u.display_name)))
                .map(str::to_string)
                .unwrap_or_else(|| format!("Team {}", idx + 1));

            let logo = match roster.metadata_str("team_logo") {
                Some(logo) => logo.to_string(),
                None => match owner.and_then(|u| non_empty(&u.avatar)) {
                    Some(avatar) => format!("{SLEEPER_AVATAR_BASE_URL}/{avatar}"),
                    None => PLACEHOLDER_LOGO.to_string(),
                },
            };

            Team::new(roster.roster_id, name, Some(logo))
        })
        .collect()
}

/// Client for Sleeper's public league endpoints.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    client: Client,
    base_url: String,
}

impl SleeperClient {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, SLEEPER_BASE_URL)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch users and rosters together and build the league's directory.
    pub async fn fetch_league(&self, league_id: &LeagueId) -> Result<TeamDirectory> {
        let (users, rosters) = tokio::try_join!(
            self.get_list::<SleeperUser>(league_id, "users"),
            self.get_list::<SleeperRoster>(league_id, "rosters"),
        )?;

        let teams = teams_from_rosters(&rosters, &users);
        info!(%league_id, teams = teams.len(), "Loaded Sleeper league");
        TeamDirectory::new(teams).map_err(|e| RankingsError::import_failed(PLATFORM, e))
    }

    async fn get_list<T: DeserializeOwned>(&self, league_id: &LeagueId, what: &str) -> Result<Vec<T>> {
        let url = format!("{}/league/{}/{}", self.base_url, league_id, what);
        debug!(%url, "Requesting Sleeper {what}");

        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RankingsError::import_failed(PLATFORM, e))?
            .error_for_status()
            .map_err(|e| RankingsError::import_failed(PLATFORM, e))?;

        // Unknown leagues come back as a literal `null`.
        let list: Option<Vec<T>> = res
            .json()
            .await
            .map_err(|e| RankingsError::import_failed(PLATFORM, e))?;
        list.ok_or_else(|| {
            RankingsError::import_failed(PLATFORM, format!("league {league_id} was not found"))
        })
    }
}
