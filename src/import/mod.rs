//! League import adapters. Each produces a complete replacement directory.
//!
//! - `manual`: pasted JSON
//! - `sleeper`: Sleeper's public league API
//! - `espn`: the ESPN proxy endpoint

pub mod espn;
pub mod manual;
pub mod sleeper;

pub use espn::EspnProxyClient;
pub use manual::parse_manual;
pub use sleeper::SleeperClient;
