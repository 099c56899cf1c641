//! Capture sweep: remove every opposing group left without liberties.

use std::collections::HashSet;

use tracing::debug;

use crate::board::{Board, Cell, Color, Coord};
use crate::group::{group_of, liberty_count};

/// Remove all groups not belonging to `mover` that have zero liberties.
///
/// Scans the board in row-major order, analysing each opposing group once.
/// Returns the removed coordinates, sorted row-major. Running it again without
/// a new placement removes nothing.
pub fn apply_captures(board: &mut Board, mover: Color) -> Vec<Coord> {
    let opponent = mover.opponent();
    let mut visited: HashSet<Coord> = HashSet::new();
    let mut captured = Vec::new();

    for pt in board.coords() {
        if board.get(pt).stone() != Some(opponent) || visited.contains(&pt) {
            continue;
        }
        let group = group_of(board, pt, opponent);
        visited.extend(group.iter().copied());
        if liberty_count(board, &group) == 0 {
            captured.extend(group);
        }
    }

    // Groups are analysed on the pre-sweep board, then cleared together.
    for &pt in &captured {
        board.set(pt, Cell::Empty);
    }
    captured.sort_unstable();
    if !captured.is_empty() {
        debug!(%mover, count = captured.len(), ?captured, "captured");
    }
    captured
}
