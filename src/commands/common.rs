//! Shared helpers: opening the session and rendering the views.

use std::fmt::Write as _;
use std::path::Path;

use crate::{
    board::{RankingList, TierBoard},
    error::RankingsError,
    session::RankingSession,
    storage::StateDatabase,
    Result,
};

/// Open the session on the given database, or the default one.
pub fn open_session(db: Option<&Path>) -> Result<RankingSession<StateDatabase>> {
    let store = match db {
        Some(path) => StateDatabase::open(path)?,
        None => StateDatabase::new()?,
    };
    RankingSession::open(store)
}

/// Turn a 1-based position typed by the user into an index into a list of
/// `len` teams.
pub fn to_index(position: usize, len: usize) -> Result<usize> {
    position
        .checked_sub(1)
        .ok_or(RankingsError::InvalidPosition { index: position, len })
}

pub fn render_ranking(ranking: &RankingList) -> String {
    if ranking.is_empty() {
        return "No teams loaded. Run `power-rankings import` first.\n".to_string();
    }
    let mut out = String::new();
    for (i, team) in ranking.teams().iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", i + 1, team.name);
    }
    out
}

pub fn render_tiers(board: &TierBoard) -> String {
    let mut out = String::new();
    for tier in board.tiers() {
        let teams = board.teams_in(&tier.id);
        let _ = writeln!(out, "[{}] {} ({})", tier.id, tier.label, teams.len());
        for (i, team) in teams.iter().enumerate() {
            let _ = writeln!(out, "    {}. {}", i + 1, team.name);
        }
    }
    out
}
