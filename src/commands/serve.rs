//! Proxy server command implementation

use std::net::SocketAddr;

use crate::{
    config::ProxyConfig,
    core::build_client,
    espn::proxy::{serve, ProxyState},
    Result,
};

pub async fn handle_serve(addr: SocketAddr) -> Result<()> {
    let config = ProxyConfig::from_env();
    if config.league_key.is_none() {
        tracing::warn!("MY_LEAGUE_KEY is not set; shared-secret requests will be rejected");
    }
    let state = ProxyState::new(config, build_client()?);
    println!("Serving ESPN proxy on http://{}/api/espn", addr);
    serve(addr, state).await
}
