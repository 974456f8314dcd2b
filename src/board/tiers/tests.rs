//! Unit tests for the tier board

use super::*;
use crate::board::drag::Slot;

fn directory(n: i64) -> TeamDirectory {
    TeamDirectory::new(
        (1..=n)
            .map(|i| Team::new(i, format!("Team {i}"), None))
            .collect(),
    )
    .unwrap()
}

fn ids(teams: &[Team]) -> Vec<i64> {
    teams.iter().map(|t| t.id.as_i64()).collect()
}

fn seeded_board(n: i64) -> TierBoard {
    let mut board = TierBoard::default();
    board.reconcile(&directory(n));
    board
}

fn tier(id: &str) -> TierId {
    TierId::from(id)
}

#[cfg(test)]
mod drag_tests {
    use super::*;

    #[test]
    fn test_intra_tier_reorder_only_changes_order() {
        let mut board = seeded_board(4);
        let drag = DragResult::new(Slot::new(UNASSIGNED_TIER_ID, 0), Slot::new(UNASSIGNED_TIER_ID, 3));

        assert!(board.apply_drag(&drag).unwrap());
        assert_eq!(ids(board.unassigned()), vec![2, 3, 4, 1]);

        let mut sorted = ids(board.unassigned());
        sorted.sort();
        assert_eq!(sorted, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_cross_tier_move_conserves_count() {
        let mut board = seeded_board(5);
        let before = board.total_teams();

        let drag = DragResult::new(Slot::new(UNASSIGNED_TIER_ID, 2), Slot::new("tier-1", 0));
        assert!(board.apply_drag(&drag).unwrap());

        assert_eq!(board.total_teams(), before);
        assert_eq!(ids(board.teams_in(&tier("tier-1"))), vec![3]);
        assert_eq!(ids(board.unassigned()), vec![1, 2, 4, 5]);
        assert_eq!(board.tier_of(TeamId::new(3)), Some(&tier("tier-1")));
    }

    #[test]
    fn test_cross_tier_insert_position_is_respected() {
        let mut board = seeded_board(4);
        for _ in 0..3 {
            let drag = DragResult::new(Slot::new(UNASSIGNED_TIER_ID, 0), Slot::new("tier-2", 99));
            board.apply_drag(&drag).unwrap();
        }
        assert_eq!(ids(board.teams_in(&tier("tier-2"))), vec![1, 2, 3]);

        let drag = DragResult::new(Slot::new(UNASSIGNED_TIER_ID, 0), Slot::new("tier-2", 1));
        board.apply_drag(&drag).unwrap();
        assert_eq!(ids(board.teams_in(&tier("tier-2"))), vec![1, 4, 2, 3]);
        assert!(board.unassigned().is_empty());
    }

    #[test]
    fn test_drop_without_destination_is_noop() {
        let mut board = seeded_board(3);
        let before = board.clone();

        let drag = DragResult::cancelled(Slot::new(UNASSIGNED_TIER_ID, 1));
        assert!(!board.apply_drag(&drag).unwrap());
        assert_eq!(board, before);
    }

    #[test]
    fn test_unknown_tier_is_rejected() {
        let mut board = seeded_board(2);
        let before = board.clone();

        let drag = DragResult::new(Slot::new(UNASSIGNED_TIER_ID, 0), Slot::new("nope", 0));
        match board.apply_drag(&drag) {
            Err(RankingsError::UnknownTier { id }) => assert_eq!(id, "nope"),
            other => panic!("Expected UnknownTier, got {other:?}"),
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_bad_source_index_is_rejected_across_tiers() {
        let mut board = seeded_board(2);
        let before = board.clone();

        let drag = DragResult::new(Slot::new("tier-1", 0), Slot::new(UNASSIGNED_TIER_ID, 0));
        assert!(matches!(
            board.apply_drag(&drag),
            Err(RankingsError::InvalidPosition { index: 0, len: 0 })
        ));
        assert_eq!(board, before);
    }
}

#[cfg(test)]
mod tier_edit_tests {
    use super::*;

    #[test]
    fn test_rename_tier() {
        let mut board = TierBoard::default();
        assert!(board.rename(&tier("tier-1"), "Elite"));
        assert_eq!(board.tier(&tier("tier-1")).unwrap().label, "Elite");
    }

    #[test]
    fn test_rename_unassigned_is_rejected() {
        let mut board = TierBoard::default();
        let before = board.tiers().to_vec();
        assert!(!board.rename(&tier(UNASSIGNED_TIER_ID), "Bench"));
        assert!(!board.rename(&tier("missing"), "Ghost"));
        assert_eq!(board.tiers(), before.as_slice());
    }

    #[test]
    fn test_add_tier_goes_before_unassigned() {
        let mut board = TierBoard::default();
        let id = board.add_tier();

        assert_eq!(id, tier("tier-8"));
        let tiers = board.tiers();
        assert_eq!(tiers.len(), 8);
        assert_eq!(tiers[6].id, id);
        assert_eq!(tiers[6].label, "Tier 8");
        assert_eq!(tiers[6].color, "purple");
        assert!(tiers[7].is_unassigned());
        assert!(board.teams_in(&id).is_empty());
        assert!(board.buckets().contains_key(&id));
    }

    #[test]
    fn test_add_tier_after_delete_keeps_ids_unique() {
        let mut board = TierBoard::default();
        let first = board.add_tier();
        assert!(board.delete_tier(&tier("tier-1")));
        let second = board.add_tier();

        assert_ne!(first, second);
        let mut ids: Vec<_> = board.tiers().iter().map(|t| t.id.clone()).collect();
        let len = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }

    #[test]
    fn test_delete_tier_moves_teams_to_unassigned_in_order() {
        let mut board = seeded_board(4);
        // tier-3 gets [A=1, B=2]; unassigned keeps [3, 4]
        board
            .apply_drag(&DragResult::new(Slot::new(UNASSIGNED_TIER_ID, 0), Slot::new("tier-3", 0)))
            .unwrap();
        board
            .apply_drag(&DragResult::new(Slot::new(UNASSIGNED_TIER_ID, 0), Slot::new("tier-3", 1)))
            .unwrap();
        assert_eq!(ids(board.teams_in(&tier("tier-3"))), vec![1, 2]);

        assert!(board.delete_tier(&tier("tier-3")));

        assert_eq!(ids(board.unassigned()), vec![3, 4, 1, 2]);
        assert!(board.tier(&tier("tier-3")).is_none());
        assert!(!board.buckets().contains_key(&tier("tier-3")));
        assert_eq!(board.total_teams(), 4);
    }

    #[test]
    fn test_delete_unassigned_is_rejected() {
        let mut board = seeded_board(2);
        let before = board.clone();
        assert!(!board.delete_tier(&tier(UNASSIGNED_TIER_ID)));
        assert!(!board.delete_tier(&tier("missing")));
        assert_eq!(board, before);
    }
}

#[cfg(test)]
mod reconcile_tests {
    use super::*;

    #[test]
    fn test_new_teams_land_in_unassigned_in_directory_order() {
        let mut board = TierBoard::default();
        assert!(board.reconcile(&directory(3)));
        assert_eq!(ids(board.unassigned()), vec![1, 2, 3]);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let mut board = TierBoard::default();
        board.reconcile(&directory(5));
        let once = board.clone();

        assert!(!board.reconcile(&directory(5)));
        assert_eq!(board, once);
    }

    #[test]
    fn test_placed_teams_stay_put() {
        let mut board = seeded_board(3);
        board
            .apply_drag(&DragResult::new(Slot::new(UNASSIGNED_TIER_ID, 1), Slot::new("tier-1", 0)))
            .unwrap();

        board.reconcile(&directory(4));
        assert_eq!(ids(board.teams_in(&tier("tier-1"))), vec![2]);
        assert_eq!(ids(board.unassigned()), vec![1, 3, 4]);
    }

    #[test]
    fn test_replaced_directory_prunes_and_refreshes() {
        let mut board = seeded_board(3);
        let replacement = TeamDirectory::new(vec![
            Team::new(2, "Renamed", Some("https://x/2.png".into())),
            Team::new(9, "Newcomer", None),
        ])
        .unwrap();

        board.reconcile(&replacement);

        assert_eq!(ids(board.unassigned()), vec![2, 9]);
        assert_eq!(board.unassigned()[0].name, "Renamed");
        assert_eq!(board.total_teams(), 2);
    }
}

#[cfg(test)]
mod restore_tests {
    use super::*;

    #[test]
    fn test_from_parts_defaults_when_nothing_saved() {
        assert_eq!(TierBoard::from_parts(None, None), TierBoard::default());
    }

    #[test]
    fn test_from_parts_restores_missing_unassigned() {
        let tiers = vec![Tier::new("tier-1", "S", "red")];
        let board = TierBoard::from_parts(Some(tiers), Some(TierBuckets::new()));

        assert_eq!(board.tiers().len(), 2);
        assert!(board.tiers()[1].is_unassigned());
        assert!(board.buckets().contains_key(&tier(UNASSIGNED_TIER_ID)));
        assert!(board.buckets().contains_key(&tier("tier-1")));
    }

    #[test]
    fn test_from_parts_moves_unassigned_last_and_folds_orphans() {
        let tiers = vec![Tier::unassigned(), Tier::new("tier-1", "S", "red")];
        let mut buckets = TierBuckets::new();
        buckets.insert(tier("ghost"), vec![Team::new(5, "Ghosted", None)]);
        buckets.insert(tier(UNASSIGNED_TIER_ID), vec![Team::new(1, "One", None)]);

        let board = TierBoard::from_parts(Some(tiers), Some(buckets));

        assert!(board.tiers().last().unwrap().is_unassigned());
        assert!(!board.buckets().contains_key(&tier("ghost")));
        assert_eq!(ids(board.unassigned()), vec![1, 5]);
    }

    #[test]
    fn test_from_parts_drops_duplicate_placements() {
        let mut buckets = TierBuckets::new();
        buckets.insert(tier("tier-1"), vec![Team::new(1, "One", None)]);
        buckets.insert(tier(UNASSIGNED_TIER_ID), vec![Team::new(1, "One", None)]);

        let board = TierBoard::from_parts(None, Some(buckets));

        assert_eq!(board.total_teams(), 1);
        assert_eq!(board.tier_of(TeamId::new(1)), Some(&tier("tier-1")));
    }
}
