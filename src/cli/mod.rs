//! CLI argument definitions and parsing.

pub mod types;

use std::{net::SocketAddr, path::PathBuf};

use clap::{Parser, Subcommand};
use types::{ids::TierId, LeagueId, Season};

#[derive(Debug, Parser)]
#[clap(name = "power-rankings", about = "Fantasy league power rankings and tier board")]
pub struct Rankings {
    /// Log at debug level.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    /// State database (or set `POWER_RANKINGS_DB`).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replace the team list from a league or a JSON file
    Import {
        #[clap(subcommand)]
        source: ImportCmd,
    },

    /// Show or reorder the power ranking
    Rank {
        #[clap(subcommand)]
        cmd: RankCmd,
    },

    /// Show or edit the tier board
    Tier {
        #[clap(subcommand)]
        cmd: TierCmd,
    },

    /// Print both the ranking and the tier board
    Show,

    /// Run the ESPN proxy (`GET /api/espn`)
    Serve {
        /// Address to listen on.
        #[clap(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

#[derive(Debug, Subcommand)]
pub enum ImportCmd {
    /// Paste-style import: `[{"id":1,"name":"Team A","logo":"url"}]`
    Json {
        /// File to read, or `-` for stdin.
        path: PathBuf,
    },

    /// Load a Sleeper league
    Sleeper {
        /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,
    },

    /// Load an ESPN league through the proxy
    Espn {
        /// League ID (or set `ESPN_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Season year; defaults to the current year.
        #[clap(long, short)]
        season: Option<Season>,

        /// Proxy base URL (or set `POWER_RANKINGS_PROXY_URL`).
        #[clap(long)]
        proxy_url: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum RankCmd {
    /// Print the ranking
    Show,

    /// Move the team at rank FROM to rank TO (both 1-based)
    Move { from: usize, to: usize },
}

#[derive(Debug, Subcommand)]
pub enum TierCmd {
    /// Print the tier board
    Show,

    /// Drag a team: FROM_TIER FROM_POS TO_TIER TO_POS (positions 1-based)
    Move {
        from_tier: TierId,
        from_pos: usize,
        to_tier: TierId,
        to_pos: usize,
    },

    /// Change a tier's label
    Rename { id: TierId, label: String },

    /// Add an empty tier above Unassigned
    Add,

    /// Delete a tier; its teams go to Unassigned
    Delete { id: TierId },
}
