//! Import command implementation

use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::{
    config::{resolve_league_id, resolve_proxy_url, ESPN_LEAGUE_ID_ENV_VAR, SLEEPER_LEAGUE_ID_ENV_VAR},
    core::build_client,
    import::{EspnProxyClient, SleeperClient},
    session::RankingSession,
    storage::KeyValueStore,
    LeagueId, Result, Season,
};

/// Read a JSON team list from a file (or stdin for `-`) and load it.
pub fn handle_import_json<S: KeyValueStore>(
    session: &mut RankingSession<S>,
    path: &Path,
) -> Result<()> {
    let mut input = String::new();
    if path == Path::new("-") {
        std::io::stdin().read_to_string(&mut input)?;
    } else {
        input = std::fs::read_to_string(path)?;
    }
    let count = session.import_json(&input)?;
    println!("✓ Loaded {} teams from JSON", count);
    Ok(())
}

pub async fn handle_import_sleeper<S: KeyValueStore>(
    session: &mut RankingSession<S>,
    league_id: Option<LeagueId>,
) -> Result<()> {
    let league_id = resolve_league_id(league_id, SLEEPER_LEAGUE_ID_ENV_VAR)?;
    println!("Fetching Sleeper league {}...", league_id);

    let client = SleeperClient::new(build_client()?);
    let directory = client.fetch_league(&league_id).await?;
    let count = directory.len();
    session.replace_directory(directory)?;

    println!("✓ Loaded {} teams from Sleeper", count);
    Ok(())
}

pub async fn handle_import_espn<S: KeyValueStore>(
    session: &mut RankingSession<S>,
    league_id: Option<LeagueId>,
    season: Option<Season>,
    proxy_url: Option<String>,
) -> Result<()> {
    let league_id = resolve_league_id(league_id, ESPN_LEAGUE_ID_ENV_VAR)?;
    let proxy_url = resolve_proxy_url(proxy_url);
    info!(%league_id, %proxy_url, "Importing ESPN league");
    println!("Fetching ESPN league {}...", league_id);

    let client = EspnProxyClient::new(build_client()?, proxy_url);
    let directory = client.fetch_league(&league_id, season).await?;
    let count = directory.len();
    session.replace_directory(directory)?;

    println!("✓ Loaded {} teams from ESPN", count);
    Ok(())
}
