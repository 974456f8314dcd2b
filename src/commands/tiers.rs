//! Tier board command implementation

use super::common::{render_tiers, to_index};
use crate::{
    board::{DragResult, Slot},
    session::RankingSession,
    storage::KeyValueStore,
    Result, TierId,
};

pub fn handle_tier_show<S: KeyValueStore>(session: &RankingSession<S>) {
    print!("{}", render_tiers(session.board()));
}

pub fn handle_tier_move<S: KeyValueStore>(
    session: &mut RankingSession<S>,
    from_tier: TierId,
    from_pos: usize,
    to_tier: TierId,
    to_pos: usize,
) -> Result<()> {
    let from_len = session.board().teams_in(&from_tier).len();
    let to_len = session.board().teams_in(&to_tier).len();
    let drag = DragResult::new(
        Slot::new(from_tier, to_index(from_pos, from_len)?),
        Slot::new(to_tier, to_index(to_pos, to_len)?),
    );
    session.move_in_tiers(&drag)?;
    print!("{}", render_tiers(session.board()));
    Ok(())
}

pub fn handle_tier_rename<S: KeyValueStore>(
    session: &mut RankingSession<S>,
    id: &TierId,
    label: &str,
) -> Result<()> {
    if session.rename_tier(id, label)? {
        println!("✓ Renamed {} to {}", id, label);
    } else {
        println!("Tier {} cannot be renamed", id);
    }
    Ok(())
}

pub fn handle_tier_add<S: KeyValueStore>(session: &mut RankingSession<S>) -> Result<()> {
    let id = session.add_tier()?;
    println!("✓ Added tier {}", id);
    Ok(())
}

pub fn handle_tier_delete<S: KeyValueStore>(
    session: &mut RankingSession<S>,
    id: &TierId,
) -> Result<()> {
    if session.delete_tier(id)? {
        println!("✓ Deleted tier {}; its teams moved to Unassigned", id);
    } else {
        println!("Tier {} cannot be deleted", id);
    }
    Ok(())
}
