//! Environment-driven configuration.
//!
//! Values given on the command line win; otherwise these variables are read:
//! `SLEEPER_LEAGUE_ID`, `ESPN_LEAGUE_ID`, `MY_LEAGUE_KEY`, `ESPN_S2`,
//! `ESPN_SWID`, `POWER_RANKINGS_PROXY_URL` and `POWER_RANKINGS_DB`.

use crate::{error::RankingsError, espn::http::FFL_BASE_URL, LeagueId, Result};

pub const SLEEPER_LEAGUE_ID_ENV_VAR: &str = "SLEEPER_LEAGUE_ID";
pub const ESPN_LEAGUE_ID_ENV_VAR: &str = "ESPN_LEAGUE_ID";
pub const LEAGUE_KEY_ENV_VAR: &str = "MY_LEAGUE_KEY";
pub const ESPN_S2_ENV_VAR: &str = "ESPN_S2";
pub const ESPN_SWID_ENV_VAR: &str = "ESPN_SWID";
pub const PROXY_URL_ENV_VAR: &str = "POWER_RANKINGS_PROXY_URL";

/// Where the ESPN importer finds the proxy when nothing else is configured.
pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:3000";

/// Non-empty value of an env var.
pub fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Use the explicit league id, else the env var, else fail before any fetch.
pub fn resolve_league_id(league_id: Option<LeagueId>, env_var: &str) -> Result<LeagueId> {
    league_id
        .or_else(|| env_value(env_var).and_then(|s| s.parse::<LeagueId>().ok()))
        .ok_or_else(|| RankingsError::MissingParameter {
            what: "League ID".to_string(),
            env_var: env_var.to_string(),
        })
}

/// Proxy URL for the ESPN importer.
pub fn resolve_proxy_url(explicit: Option<String>) -> String {
    explicit
        .or_else(|| env_value(PROXY_URL_ENV_VAR))
        .unwrap_or_else(|| DEFAULT_PROXY_URL.to_string())
}

/// Server-held settings of the ESPN proxy.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Shared secret checked against the `key` query parameter.
    pub league_key: Option<String>,
    /// League served in shared-secret mode.
    pub league_id: Option<LeagueId>,
    pub espn_s2: Option<String>,
    pub swid: Option<String>,
    pub upstream_base: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            league_key: None,
            league_id: None,
            espn_s2: None,
            swid: None,
            upstream_base: FFL_BASE_URL.to_string(),
        }
    }
}

impl ProxyConfig {
    pub fn from_env() -> Self {
        Self {
            league_key: env_value(LEAGUE_KEY_ENV_VAR),
            league_id: env_value(ESPN_LEAGUE_ID_ENV_VAR).and_then(|s| s.parse().ok()),
            espn_s2: env_value(ESPN_S2_ENV_VAR),
            swid: env_value(ESPN_SWID_ENV_VAR),
            upstream_base: FFL_BASE_URL.to_string(),
        }
    }
}
