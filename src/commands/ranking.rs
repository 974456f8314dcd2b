//! Ranking command implementation

use super::common::{render_ranking, to_index};
use crate::{session::RankingSession, storage::KeyValueStore, Result};

pub fn handle_rank_show<S: KeyValueStore>(session: &RankingSession<S>) {
    print!("{}", render_ranking(session.ranking()));
}

/// Move the team at rank `from` to rank `to` (1-based).
pub fn handle_rank_move<S: KeyValueStore>(
    session: &mut RankingSession<S>,
    from: usize,
    to: usize,
) -> Result<()> {
    let len = session.ranking().len();
    session.reorder_ranking(to_index(from, len)?, Some(to_index(to, len)?))?;
    print!("{}", render_ranking(session.ranking()));
    Ok(())
}
