//! HTTP utilities for upstream fantasy APIs

use crate::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, COOKIE},
    Client,
};
use std::time::Duration;

const USER_AGENT: &str = concat!("power-rankings/", env!("CARGO_PKG_VERSION"));

/// Shared client with a request timeout.
pub fn build_client() -> Result<Client> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(20))
        .build()?)
}

/// Headers for ESPN requests, with session cookies when both are known.
///
/// Private leagues need `espn_s2` and `SWID`; public leagues work without.
pub fn espn_cookie_header_map(espn_s2: Option<&str>, swid: Option<&str>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let (Some(s2), Some(swid)) = (espn_s2, swid) {
        let cookie = format!("espn_s2={}; SWID={};", s2, swid);
        h.insert(COOKIE, HeaderValue::from_str(&cookie)?);
    }
    Ok(h)
}
