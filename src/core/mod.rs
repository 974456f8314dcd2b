//! Core utilities shared by the importers and the proxy
//!
//! - `http`: client construction and upstream cookie headers

pub mod http;

pub use http::{build_client, espn_cookie_header_map};
