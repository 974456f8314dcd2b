//! `GET /api/espn`: a thin proxy in front of the ESPN fantasy API.
//!
//! Two modes, chosen by the query string:
//! - `?key=..`: shared-secret mode. The key must match the configured secret;
//!   the configured league's raw payload is returned unchanged.
//! - `?leagueId=..&seasonId=..`: returns `{teams: [{id, name, logo}]}`.
//!
//! Upstream requests carry the server-held ESPN session cookies.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, warn};

use super::{
    http::get_league,
    types::{teams_from_league, ErrorBody, TeamsResponse, NO_TEAMS_MESSAGE},
};
use crate::{
    config::ProxyConfig, core::espn_cookie_header_map, error::RankingsError, LeagueId, Result,
    Season,
};

/// Query parameters accepted by the proxy.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EspnQuery {
    pub key: Option<String>,
    #[serde(rename = "leagueId")]
    pub league_id: Option<String>,
    #[serde(rename = "seasonId")]
    pub season_id: Option<String>,
}

#[derive(Clone)]
pub struct ProxyState {
    config: Arc<ProxyConfig>,
    client: Client,
}

impl ProxyState {
    pub fn new(config: ProxyConfig, client: Client) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }
}

/// Status plus JSON body, as sent to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyReply {
    pub status: StatusCode,
    pub body: Value,
}

impl ProxyReply {
    fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: serde_json::to_value(ErrorBody::new(message))
                .unwrap_or_else(|_| Value::Null),
        }
    }
}

impl IntoResponse for ProxyReply {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Router exposing the proxy under `/api/espn`.
pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route("/api/espn", get(espn_handler))
        .with_state(state)
}

/// Bind `addr` and serve until the process stops.
pub async fn serve(addr: SocketAddr, state: ProxyState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "ESPN proxy listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn espn_handler(State(state): State<ProxyState>, Query(query): Query<EspnQuery>) -> ProxyReply {
    handle_espn_request(&state, query).await
}

/// Answer one proxy request. Never fails; every error becomes a reply.
pub async fn handle_espn_request(state: &ProxyState, query: EspnQuery) -> ProxyReply {
    if let Some(key) = query.key.as_deref() {
        return shared_secret_reply(state, key).await;
    }

    let Some(league_id) = query.league_id.as_deref().and_then(|s| s.parse::<LeagueId>().ok())
    else {
        return ProxyReply::error(StatusCode::BAD_REQUEST, "Missing leagueId");
    };

    let season = match query.season_id.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => match raw.parse::<Season>() {
            Ok(season) => season,
            Err(_) => return ProxyReply::error(StatusCode::BAD_REQUEST, "Invalid seasonId"),
        },
        None => Season::current(),
    };

    league_teams_reply(state, &league_id, season).await
}

async fn shared_secret_reply(state: &ProxyState, key: &str) -> ProxyReply {
    let authorized = state
        .config
        .league_key
        .as_deref()
        .is_some_and(|secret| secret == key);
    if !authorized {
        warn!("Rejected proxy request with a bad key");
        return ProxyReply::error(StatusCode::FORBIDDEN, RankingsError::Unauthorized.to_string());
    }

    let Some(league_id) = state.config.league_id.clone() else {
        error!("Shared-secret request but no ESPN league configured");
        return ProxyReply::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "ESPN_LEAGUE_ID is not configured",
        );
    };

    match fetch(state, &league_id, Season::current(), None).await {
        Ok(payload) => ProxyReply::ok(payload),
        Err(e) => failure_reply(e),
    }
}

async fn league_teams_reply(state: &ProxyState, league_id: &LeagueId, season: Season) -> ProxyReply {
    let payload = match fetch(state, league_id, season, Some("mTeam")).await {
        Ok(payload) => payload,
        Err(e) => return failure_reply(e),
    };

    let teams = match teams_from_league(payload) {
        Ok(teams) => teams,
        Err(e) => return failure_reply(e),
    };

    if teams.is_empty() {
        info!(%league_id, %season, "ESPN league has no visible teams");
        return ProxyReply::error(StatusCode::OK, NO_TEAMS_MESSAGE);
    }

    info!(%league_id, %season, teams = teams.len(), "Served ESPN league teams");
    match serde_json::to_value(TeamsResponse { teams }) {
        Ok(body) => ProxyReply::ok(body),
        Err(e) => failure_reply(e.into()),
    }
}

async fn fetch(
    state: &ProxyState,
    league_id: &LeagueId,
    season: Season,
    view: Option<&str>,
) -> Result<Value> {
    let headers = espn_cookie_header_map(state.config.espn_s2.as_deref(), state.config.swid.as_deref())?;
    get_league(
        &state.client,
        &state.config.upstream_base,
        headers,
        league_id,
        season,
        view,
    )
    .await
}

fn failure_reply(e: RankingsError) -> ProxyReply {
    match e {
        RankingsError::UpstreamFailure { status, message } => ProxyReply::error(
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            message,
        ),
        other => {
            error!(error = %other, "ESPN proxy request failed");
            ProxyReply::error(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}
