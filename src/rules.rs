//! Move representation and the legality pipeline.
//!
//! A placement is checked in this order:
//! 1. bounds ([`MoveError::CellDoesNotExist`])
//! 2. occupancy ([`MoveError::CellNotEmpty`])
//! 3. suicide ([`MoveError::ImmediateCapture`]), before or after the capture
//!    sweep depending on [`SuicideCheck`]
//! 4. capture sweep
//! 5. single-step repetition ([`MoveError::ProhibitionOfRepetition`])
//!
//! On any rejection the board is restored to its exact pre-move contents.
//! A pass is always legal and never touches the board.
//!
//! The repetition guard only compares against the position immediately
//! before the move, not the whole game history (no superko).

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::board::{Board, Color, Coord};
use crate::capture::apply_captures;
use crate::group::{group_of, liberty_count};

/// A move: place a stone at zero-based `(row, col)`, or pass.
///
/// Coordinates are signed so that off-board proposals can be represented and
/// rejected with [`MoveError::CellDoesNotExist`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Place(isize, isize),
    Pass,
}

impl Move {
    pub fn at((row, col): Coord) -> Move {
        Move::Place(row as isize, col as isize)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(row, col) => write!(f, "({row}, {col})"),
            Move::Pass => write!(f, "pass"),
        }
    }
}

/// Why a move was rejected. Every variant is an illegal move and is
/// recoverable by the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("illegal move ({row}, {col}): cell does not exist")]
    CellDoesNotExist { row: isize, col: isize },

    #[error("illegal move ({row}, {col}): cell not empty")]
    CellNotEmpty { row: isize, col: isize },

    #[error("illegal move ({row}, {col}): immediate capture")]
    ImmediateCapture { row: isize, col: isize },

    #[error("illegal move ({row}, {col}): prohibition of repetition")]
    ProhibitionOfRepetition { row: isize, col: isize },
}

impl MoveError {
    /// The offending coordinate as submitted.
    pub fn coord(&self) -> (isize, isize) {
        match *self {
            MoveError::CellDoesNotExist { row, col }
            | MoveError::CellNotEmpty { row, col }
            | MoveError::ImmediateCapture { row, col }
            | MoveError::ProhibitionOfRepetition { row, col } => (row, col),
        }
    }
}

/// When the mover's own group is tested for zero liberties.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SuicideCheck {
    /// Test the placed stone's group before removing captured enemies.
    /// A move that would only gain liberties by capturing is rejected.
    #[default]
    BeforeCapture,
    /// Standard Go: remove captured enemies first, then test.
    AfterCapture,
}

/// Rule variations for the legality pipeline.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rules {
    pub suicide: SuicideCheck,
}

/// Effect of an accepted move.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Stones removed by the capture sweep, row-major.
    pub captured: Vec<Coord>,
}

/// Play `mv` for `color` under the default [`Rules`].
pub fn perform_move(board: &mut Board, mv: Move, color: Color) -> Result<MoveOutcome, MoveError> {
    perform_move_with(board, mv, color, &Rules::default())
}

/// Play `mv` for `color` under `rules`.
///
/// On `Err` the board is unchanged.
pub fn perform_move_with(
    board: &mut Board,
    mv: Move,
    color: Color,
    rules: &Rules,
) -> Result<MoveOutcome, MoveError> {
    let (row, col) = match mv {
        Move::Pass => return Ok(MoveOutcome::default()),
        Move::Place(row, col) => (row, col),
    };

    if !board.contains(row, col) {
        return Err(MoveError::CellDoesNotExist { row, col });
    }
    let pt = (row as usize, col as usize);
    if !board.get(pt).is_empty() {
        return Err(MoveError::CellNotEmpty { row, col });
    }

    let snapshot = board.clone();
    board.set(pt, color.into());

    if rules.suicide == SuicideCheck::BeforeCapture && is_suicide(board, pt, color) {
        *board = snapshot;
        return Err(MoveError::ImmediateCapture { row, col });
    }

    let captured = apply_captures(board, color);

    if rules.suicide == SuicideCheck::AfterCapture && is_suicide(board, pt, color) {
        *board = snapshot;
        return Err(MoveError::ImmediateCapture { row, col });
    }

    if let Err(e) = check_repetition(&snapshot, board, row, col) {
        *board = snapshot;
        return Err(e);
    }

    debug!(%color, row, col, captures = captured.len(), "move committed");
    Ok(MoveOutcome { captured })
}

fn is_suicide(board: &Board, pt: Coord, color: Color) -> bool {
    let group = group_of(board, pt, color);
    liberty_count(board, &group) == 0
}

fn check_repetition(before: &Board, after: &Board, row: isize, col: isize) -> Result<(), MoveError> {
    if before == after {
        return Err(MoveError::ProhibitionOfRepetition { row, col });
    }
    Ok(())
}

/// Whether `mv` is legal for `color`, evaluated on a scratch copy.
pub fn is_legal(board: &Board, mv: Move, color: Color) -> bool {
    is_legal_with(board, mv, color, &Rules::default())
}

pub fn is_legal_with(board: &Board, mv: Move, color: Color, rules: &Rules) -> bool {
    let mut scratch = board.clone();
    perform_move_with(&mut scratch, mv, color, rules).is_ok()
}

/// Every legal placement for `color` under the default [`Rules`], row-major,
/// followed by [`Move::Pass`].
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    legal_moves_with(board, color, &Rules::default())
}

pub fn legal_moves_with(board: &Board, color: Color, rules: &Rules) -> Vec<Move> {
    board
        .empty_cells()
        .into_iter()
        .map(Move::at)
        .filter(|&mv| is_legal_with(board, mv, color, rules))
        .chain(std::iter::once(Move::Pass))
        .collect()
}

impl Board {
    /// Play `mv` for `color` under the default rules. See [`perform_move`].
    pub fn perform_move(&mut self, mv: Move, color: Color) -> Result<MoveOutcome, MoveError> {
        perform_move(self, mv, color)
    }
}
