//! ESPN league import through the proxy endpoint.

use reqwest::Client;
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    error::RankingsError,
    espn::types::{ErrorBody, TeamsResponse},
    model::TeamDirectory,
    LeagueId, Result, Season,
};

const PLATFORM: &str = "ESPN";

/// Client for `GET {proxy}/api/espn?leagueId=..`.
#[derive(Debug, Clone)]
pub struct EspnProxyClient {
    client: Client,
    base_url: String,
}

impl EspnProxyClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_league(
        &self,
        league_id: &LeagueId,
        season: Option<Season>,
    ) -> Result<TeamDirectory> {
        let url = format!("{}/api/espn", self.base_url);
        let mut params = vec![("leagueId", league_id.to_string())];
        if let Some(season) = season {
            params.push(("seasonId", season.to_string()));
        }

        let res = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| RankingsError::import_failed(PLATFORM, e))?;
        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(|e| RankingsError::import_failed(PLATFORM, e))?;
        let body: Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(RankingsError::import_failed(PLATFORM, e)),
            Err(_) => {
                warn!(status = status.as_u16(), "ESPN proxy replied without a JSON body");
                return Err(RankingsError::UpstreamFailure {
                    status: status.as_u16(),
                    message: upstream_message(status.as_u16(), &text),
                });
            }
        };

        let directory = directory_from_reply(status.as_u16(), body)?;
        info!(%league_id, teams = directory.len(), "Loaded ESPN league");
        Ok(directory)
    }
}

/// Interpret a proxy reply.
///
/// An `{error}` body on a 2xx is informational (`EmptyResult`); on any other
/// status it is an `UpstreamFailure` carrying that status.
pub fn directory_from_reply(status: u16, body: Value) -> Result<TeamDirectory> {
    let success = (200..300).contains(&status);

    if let Ok(ErrorBody { error }) = serde_json::from_value::<ErrorBody>(body.clone()) {
        warn!(status, %error, "ESPN proxy reported an error");
        return Err(if success {
            RankingsError::EmptyResult { message: error }
        } else {
            RankingsError::UpstreamFailure {
                status,
                message: error,
            }
        });
    }
    if !success {
        return Err(RankingsError::UpstreamFailure {
            status,
            message: upstream_message(status, ""),
        });
    }

    let TeamsResponse { teams } = serde_json::from_value(body)
        .map_err(|e| RankingsError::import_failed(PLATFORM, e))?;
    TeamDirectory::new(teams).map_err(|e| RankingsError::import_failed(PLATFORM, e))
}

fn upstream_message(status: u16, text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        format!("ESPN proxy returned status {status}")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::espn::types::NO_TEAMS_MESSAGE;
    use serde_json::json;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    #[test]
    fn test_reply_with_teams() {
        let dir = directory_from_reply(
            200,
            json!({"teams": [{"id": 1, "name": "Gotham Knights", "logo": "https://x/1.png"}]}),
        )
        .unwrap();
        assert_eq!(dir.teams()[0].name, "Gotham Knights");
    }

    #[test]
    fn test_reply_with_error_on_ok_is_empty_result() {
        match directory_from_reply(200, json!({"error": NO_TEAMS_MESSAGE})) {
            Err(RankingsError::EmptyResult { message }) => assert_eq!(message, NO_TEAMS_MESSAGE),
            other => panic!("Expected EmptyResult, got {other:?}"),
        }
    }

    #[test]
    fn test_reply_with_error_status_is_upstream_failure() {
        match directory_from_reply(404, json!({"error": "Failed to fetch ESPN API"})) {
            Err(RankingsError::UpstreamFailure { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Failed to fetch ESPN API");
            }
            other => panic!("Expected UpstreamFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_reply_keeps_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/espn"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&mock_server)
            .await;

        let client = EspnProxyClient::new(Client::new(), mock_server.uri());
        match client.fetch_league(&"4242".parse().unwrap(), None).await {
            Err(RankingsError::UpstreamFailure { status, message }) => {
                assert_eq!(status, 502);
                assert_eq!(message, "<html>Bad Gateway</html>");
            }
            other => panic!("Expected UpstreamFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_error_reply_gets_default_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/espn"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = EspnProxyClient::new(Client::new(), mock_server.uri());
        match client.fetch_league(&"4242".parse().unwrap(), None).await {
            Err(RankingsError::UpstreamFailure { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "ESPN proxy returned status 503");
            }
            other => panic!("Expected UpstreamFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_ok_reply_is_import_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/espn"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = EspnProxyClient::new(Client::new(), mock_server.uri());
        match client.fetch_league(&"4242".parse().unwrap(), None).await {
            Err(RankingsError::ImportFailed { platform, .. }) => assert_eq!(platform, "ESPN"),
            other => panic!("Expected ImportFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_league_passes_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/espn"))
            .and(query_param("leagueId", "4242"))
            .and(query_param("seasonId", "2024"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "teams": [{"id": 1, "name": "A", "logo": "https://x/a.png"},
                          {"id": 2, "name": "B", "logo": "https://x/b.png"}]
            })))
            .mount(&mock_server)
            .await;

        let client = EspnProxyClient::new(Client::new(), mock_server.uri());
        let dir = client
            .fetch_league(&"4242".parse().unwrap(), Some(Season::new(2024)))
            .await
            .unwrap();
        assert_eq!(dir.len(), 2);
    }
}
