//! The state owner: directory, ranking list and tier board behind one
//! persistence port.
//!
//! Every action runs against a working copy which is written to the store
//! before it replaces the live state, so a failed action or a failed write
//! leaves both memory and storage as they were.

use tracing::{debug, info, warn};

use crate::{
    board::{tiers::TierBuckets, DragResult, RankingList, TierBoard},
    import::parse_manual,
    model::{Team, TeamDirectory, Tier},
    storage::{
        encode, load_json, KeyValueStore, RANKINGS_KEY, TIERED_TEAMS_KEY, TIER_NAMES_KEY,
    },
    Result, TierId,
};


#[derive(Debug, Clone, PartialEq, Eq)]
struct BoardState {
    directory: TeamDirectory,
    ranking: RankingList,
    board: TierBoard,
}

pub struct RankingSession<S: KeyValueStore> {
    store: S,
    state: BoardState,
}

impl<S: KeyValueStore> RankingSession<S> {
    /// Restore saved state. The saved ranking also defines the directory.
    pub fn open(store: S) -> Result<Self> {
        let saved_ranking: Option<Vec<Team>> = load_json(&store, RANKINGS_KEY)?;
        let saved_tiers: Option<Vec<Tier>> = load_json(&store, TIER_NAMES_KEY)?;
        let saved_buckets: Option<TierBuckets> = load_json(&store, TIERED_TEAMS_KEY)?;

        let directory = match saved_ranking {
            Some(teams) => TeamDirectory::new(teams).unwrap_or_else(|e| {
                warn!(error = %e, "Ignoring saved rankings");
                TeamDirectory::default()
            }),
            None => TeamDirectory::default(),
        };
        let ranking = RankingList::from_directory(&directory);
        let mut board = TierBoard::from_parts(saved_tiers, saved_buckets);
        let board_changed = board.reconcile(&directory);

        let mut session = Self {
            store,
            state: BoardState {
                directory,
                ranking,
                board,
            },
        };
        if board_changed {
            debug!("Aligning the saved tier board with the saved rankings");
            let board = session.state.board.clone();
            session.write_board(&board)?;
        }

        info!(
            teams = session.state.directory.len(),
            tiers = session.state.board.tiers().len(),
            "Opened ranking session"
        );
        Ok(session)
    }

    pub fn directory(&self) -> &TeamDirectory {
        &self.state.directory
    }

    pub fn ranking(&self) -> &RankingList {
        &self.state.ranking
    }

    pub fn board(&self) -> &TierBoard {
        &self.state.board
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Replace the directory wholesale. The ranking restarts in directory
    /// order and the tier board is reconciled against the new teams.
    pub fn replace_directory(&mut self, directory: TeamDirectory) -> Result<()> {
        let mut next = self.state.clone();
        next.ranking = RankingList::from_directory(&directory);
        next.board.reconcile(&directory);
        next.directory = directory;

        self.store.set_many(&[
            (RANKINGS_KEY, encode(&next.ranking)?),
            (TIERED_TEAMS_KEY, encode(next.board.buckets())?),
            (TIER_NAMES_KEY, encode(next.board.tiers())?),
        ])?;
        info!(teams = next.directory.len(), "Replaced team directory");
        self.state = next;
        Ok(())
    }

    /// Parse pasted JSON and, if valid, replace the directory with it.
    pub fn import_json(&mut self, input: &str) -> Result<usize> {
        let directory = parse_manual(input)?;
        let count = directory.len();
        self.replace_directory(directory)?;
        Ok(count)
    }

    /// Move a team in the power ranking. `false` when nothing moved.
    pub fn reorder_ranking(&mut self, source: usize, destination: Option<usize>) -> Result<bool> {
        let mut ranking = self.state.ranking.clone();
        if !ranking.reorder(source, destination)? {
            return Ok(false);
        }
        self.store.set(RANKINGS_KEY, &encode(&ranking)?)?;
        self.state.ranking = ranking;
        Ok(true)
    }

    /// Apply a drop on the tier board. `false` when nothing moved.
    pub fn move_in_tiers(&mut self, drag: &DragResult) -> Result<bool> {
        self.update_board(|board| board.apply_drag(drag))
    }

    pub fn rename_tier(&mut self, id: &TierId, label: &str) -> Result<bool> {
        self.update_board(|board| Ok(board.rename(id, label)))
    }

    pub fn add_tier(&mut self) -> Result<TierId> {
        let mut board = self.state.board.clone();
        let id = board.add_tier();
        self.write_board(&board)?;
        self.state.board = board;
        Ok(id)
    }

    pub fn delete_tier(&mut self, id: &TierId) -> Result<bool> {
        self.update_board(|board| Ok(board.delete_tier(id)))
    }

    fn update_board<F>(&mut self, change: F) -> Result<bool>
    where
        F: FnOnce(&mut TierBoard) -> Result<bool>,
    {
        let mut board = self.state.board.clone();
        if !change(&mut board)? {
            return Ok(false);
        }
        self.write_board(&board)?;
        self.state.board = board;
        Ok(true)
    }

    fn write_board(&mut self, board: &TierBoard) -> Result<()> {
        self.store.set_many(&[
            (TIERED_TEAMS_KEY, encode(board.buckets())?),
            (TIER_NAMES_KEY, encode(board.tiers())?),
        ])
    }
}
