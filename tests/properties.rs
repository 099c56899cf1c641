//! Property tests over arbitrary small positions.

use proptest::prelude::*;

use gobot_core::board::{Board, Cell, Color, Coord};
use gobot_core::capture::apply_captures;
use gobot_core::group::{group_of, liberties_of, liberty_count};
use gobot_core::rules::{Move, MoveError, Rules, SuicideCheck, perform_move, perform_move_with};

// =============================================================================
// Strategies
// =============================================================================

fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(Cell::Empty), Just(Cell::Black), Just(Cell::White)]
}

fn color() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::Black), Just(Color::White)]
}

fn board() -> impl Strategy<Value = Board> {
    (1usize..=6).prop_flat_map(|n| {
        prop::collection::vec(cell(), n * n).prop_map(move |cells| {
            let grid = cells.chunks(n).map(<[Cell]>::to_vec).collect();
            Board::from_grid(grid).expect("square grid")
        })
    })
}

/// A board plus a coordinate that may fall one step outside it.
fn board_and_move() -> impl Strategy<Value = (Board, isize, isize)> {
    board().prop_flat_map(|b| {
        let s = b.size() as isize;
        (Just(b), -1..=s, -1..=s)
    })
}

fn stones(board: &Board) -> Vec<(Coord, Color)> {
    board
        .coords()
        .filter_map(|c| board.get(c).stone().map(|color| (c, color)))
        .collect()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn capture_sweep_is_idempotent(mut b in board(), mover in color()) {
        apply_captures(&mut b, mover);
        let once = b.clone();
        let second = apply_captures(&mut b, mover);
        prop_assert!(second.is_empty());
        prop_assert_eq!(b, once);
    }

    #[test]
    fn rejected_moves_leave_board_untouched(
        (mut b, row, col) in board_and_move(),
        mover in color(),
        after_capture in any::<bool>(),
    ) {
        let rules = Rules {
            suicide: if after_capture { SuicideCheck::AfterCapture } else { SuicideCheck::BeforeCapture },
        };
        let before = b.clone();
        if perform_move_with(&mut b, Move::Place(row, col), mover, &rules).is_err() {
            prop_assert_eq!(b, before);
        }
    }

    #[test]
    fn occupied_cells_are_rejected(b in board(), mover in color()) {
        for (coord, _) in stones(&b) {
            let mut scratch = b.clone();
            let (row, col) = (coord.0 as isize, coord.1 as isize);
            prop_assert_eq!(
                perform_move(&mut scratch, Move::Place(row, col), mover),
                Err(MoveError::CellNotEmpty { row, col })
            );
        }
    }

    #[test]
    fn off_board_is_rejected(mut b in board(), mover in color()) {
        let s = b.size() as isize;
        prop_assert_eq!(
            perform_move(&mut b, Move::Place(-1, 0), mover),
            Err(MoveError::CellDoesNotExist { row: -1, col: 0 })
        );
        prop_assert_eq!(
            perform_move(&mut b, Move::Place(s, 0), mover),
            Err(MoveError::CellDoesNotExist { row: s, col: 0 })
        );
    }

    #[test]
    fn committed_move_leaves_no_dead_opponent_groups(
        (mut b, row, col) in board_and_move(),
        mover in color(),
    ) {
        if perform_move(&mut b, Move::Place(row, col), mover).is_ok() {
            let placed = (row as usize, col as usize);
            prop_assert_eq!(b.get(placed), Cell::from(mover));
            let own = group_of(&b, placed, mover);
            prop_assert!(liberty_count(&b, &own) > 0);
            for (coord, color) in stones(&b) {
                if color == mover.opponent() {
                    let group = group_of(&b, coord, color);
                    prop_assert!(liberty_count(&b, &group) > 0);
                }
            }
        }
    }

    #[test]
    fn group_is_same_from_any_member(b in board()) {
        for (coord, color) in stones(&b) {
            let group = group_of(&b, coord, color);
            prop_assert!(group.contains(&coord));
            for &member in &group {
                prop_assert_eq!(&group_of(&b, member, color), &group);
            }
        }
    }

    #[test]
    fn liberties_ignore_group_order(b in board()) {
        for (coord, color) in stones(&b) {
            let group = group_of(&b, coord, color);
            let mut ordered: Vec<Coord> = group.iter().copied().collect();
            ordered.sort_unstable();
            let forward = liberties_of(&b, &ordered);
            ordered.reverse();
            let backward = liberties_of(&b, &ordered);
            prop_assert_eq!(&forward, &backward);
            prop_assert_eq!(forward, liberties_of(&b, &group));
            prop_assert!(backward.iter().all(|&l| b.get(l).is_empty()));
        }
    }

    #[test]
    fn pass_never_changes_board(mut b in board(), mover in color()) {
        let before = b.clone();
        prop_assert!(perform_move(&mut b, Move::Pass, mover).is_ok());
        prop_assert_eq!(b, before);
    }
}
