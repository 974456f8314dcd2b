//! Fantasy Power Rankings Library
//!
//! Import a fantasy league's teams, then order them in a power ranking or
//! sort them into a tier board. State lives in a local key-value store.
//!
//! ## Features
//!
//! - **League Import**: Sleeper's public API, ESPN through a proxy, or pasted JSON
//! - **Power Ranking**: one reorderable list of every team
//! - **Tier Board**: named buckets plus a reserved Unassigned bucket
//! - **Persistence**: every change is written through an injected store
//! - **ESPN Proxy**: `GET /api/espn` forwarding with server-held cookies
//!
//! ## Quick Start
//!
//! ```rust
//! use power_rankings::{session::RankingSession, storage::MemoryStore};
//! use power_rankings::board::{DragResult, Slot};
//!
//! # fn example() -> power_rankings::Result<()> {
//! let mut session = RankingSession::open(MemoryStore::new())?;
//! session.import_json(r#"[{"id":1,"name":"Team A"},{"id":2,"name":"Team B"}]"#)?;
//!
//! session.reorder_ranking(1, Some(0))?;
//! session.move_in_tiers(&DragResult::new(Slot::new("unassigned", 0), Slot::new("tier-1", 0)))?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export SLEEPER_LEAGUE_ID=1048264577340092416
//! export ESPN_LEAGUE_ID=123456
//! export MY_LEAGUE_KEY=change-me ESPN_S2=... ESPN_SWID={...}
//! ```

pub mod board;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod espn;
pub mod import;
pub mod logging;
pub mod model;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{LeagueId, Season, TeamId, TierId};
pub use error::{RankingsError, Result};
pub use model::{Team, TeamDirectory, Tier};
