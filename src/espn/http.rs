use reqwest::{header::HeaderMap, Client};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{error::RankingsError, LeagueId, Result, Season};


/// Base path for ESPN Fantasy Football v3 API.
pub const FFL_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl";

/// Message returned to callers when ESPN answers with a non-2xx status.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch ESPN API";

/// Build the league URL for a season under `base`.
pub fn league_url(base: &str, league_id: &LeagueId, season: Season) -> String {
    format!(
        "{}/seasons/{}/segments/0/leagues/{}",
        base.trim_end_matches('/'),
        season,
        league_id
    )
}

/// Fetch the raw league document, optionally narrowed to one `view`.
///
/// Non-2xx answers become `UpstreamFailure` carrying ESPN's status.
pub async fn get_league(
    client: &Client,
    base: &str,
    headers: HeaderMap,
    league_id: &LeagueId,
    season: Season,
    view: Option<&str>,
) -> Result<Value> {
    let url = league_url(base, league_id, season);
    debug!(%url, view, "Requesting ESPN league");

    let mut request = client.get(&url).headers(headers);
    if let Some(view) = view {
        request = request.query(&[("view", view)]);
    }
    let res = request.send().await?;

    let status = res.status();
    if !status.is_success() {
        warn!(%league_id, status = status.as_u16(), "ESPN league request failed");
        return Err(RankingsError::UpstreamFailure {
            status: status.as_u16(),
            message: UPSTREAM_FAILURE_MESSAGE.to_string(),
        });
    }

    Ok(res.json::<Value>().await?)
}
