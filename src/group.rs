//! Group and liberty analysis.
//!
//! A group is the maximal set of same-color stones connected orthogonally.
//! Its liberties are the distinct empty points orthogonally adjacent to any
//! member. Both are recomputed on demand and returned as sets, so callers
//! never depend on traversal order.

use std::collections::HashSet;

use tracing::trace;

use crate::board::{Board, Cell, Color, Coord};

/// Collect the group of `color` containing `start`.
///
/// Flood-fill with an explicit stack, so board size never limits recursion depth.
///
/// # Panics
/// If `start` is outside the board or does not hold a stone of `color`.
pub fn group_of(board: &Board, start: Coord, color: Color) -> HashSet<Coord> {
    let cell = Cell::from(color);
    assert_eq!(
        board.get(start),
        cell,
        "group origin {start:?} does not hold a {color} stone"
    );

    let mut stack = vec![start];
    let mut visited = HashSet::from([start]);
    while let Some(pt) = stack.pop() {
        for n in board.neighbors(pt) {
            if board.get(n) == cell && visited.insert(n) {
                stack.push(n);
            }
        }
    }
    trace!(?start, %color, size = visited.len(), "group");
    visited
}

/// Collect the group of whatever stone sits at `start`.
///
/// # Panics
/// If `start` is empty or outside the board.
pub fn group_at(board: &Board, start: Coord) -> HashSet<Coord> {
    match board.get(start).stone() {
        Some(color) => group_of(board, start, color),
        None => panic!("group origin {start:?} is empty"),
    }
}

/// Distinct empty points adjacent to any coordinate in `group`.
///
/// # Panics
/// If a member is outside the board or empty.
pub fn liberties_of<'a>(board: &Board, group: impl IntoIterator<Item = &'a Coord>) -> HashSet<Coord> {
    let mut libs = HashSet::new();
    for &pt in group {
        assert!(!board.get(pt).is_empty(), "group member {pt:?} is empty");
        libs.extend(board.neighbors(pt).filter(|&n| board.get(n).is_empty()));
    }
    libs
}

/// Number of liberties of `group`. Zero means the group is captured.
pub fn liberty_count<'a>(board: &Board, group: impl IntoIterator<Item = &'a Coord>) -> usize {
    let count = liberties_of(board, group).len();
    trace!(count, "liberties");
    count
}
