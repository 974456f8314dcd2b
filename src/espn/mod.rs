//! ESPN fantasy API access and the proxy that fronts it
//!
//! - `http`: upstream league requests
//! - `types`: upstream payload shapes and their normalization into teams
//! - `proxy`: the `GET /api/espn` endpoint

pub mod http;
pub mod proxy;
pub mod types;
