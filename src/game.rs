//! Local play loop: two players alternate on one board.
//!
//! The loop owns the retry policy. An illegal proposal is logged and replaced
//! by a pass; the engine itself never retries.
//!
//! The loop stops after consecutive passes or a move limit. It does not
//! score or decide a winner.

use tracing::{info, warn};

use crate::board::{Board, Color, Coord};
use crate::constants::{PASSES_TO_STOP, max_game_len};
use crate::player::Player;
use crate::rules::{Move, MoveError, Rules, perform_move_with};

/// One entry of the game record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub color: Color,
    /// What the player asked for.
    pub proposed: Move,
    /// What was actually played (a pass if the proposal was illegal).
    pub played: Move,
    pub error: Option<MoveError>,
    pub captured: Vec<Coord>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StopReason {
    ConsecutivePasses,
    MoveLimit,
}

#[derive(Clone, Debug)]
pub struct GameSummary {
    pub moves: usize,
    pub final_board: Board,
    pub stopped: StopReason,
}

pub struct Game {
    board: Board,
    rules: Rules,
    players: [Box<dyn Player>; 2],
    to_move: Color,
    history: Vec<Turn>,
    passes: usize,
}

impl Game {
    /// Start a game on `board` with Black to move.
    ///
    /// # Panics
    /// If the players' colors are not Black and White respectively.
    pub fn new(board: Board, black: Box<dyn Player>, white: Box<dyn Player>) -> Self {
        assert_eq!(black.color(), Color::Black, "first player must be black");
        assert_eq!(white.color(), Color::White, "second player must be white");
        Self {
            board,
            rules: Rules::default(),
            players: [black, white],
            to_move: Color::Black,
            history: Vec::new(),
            passes: 0,
        }
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Ask the player to move, play it or fall back to a pass, and hand
    /// the turn over.
    pub fn step(&mut self) -> &Turn {
        let color = self.to_move;
        let player = &mut self.players[color as usize];
        let proposed = player.propose_move(&self.board);

        let (played, error, captured) =
            match perform_move_with(&mut self.board, proposed, color, &self.rules) {
                Ok(outcome) => (proposed, None, outcome.captured),
                Err(e) => {
                    warn!(player = player.name(), %color, error = %e, "illegal proposal, passing");
                    (Move::Pass, Some(e), Vec::new())
                }
            };

        if played == Move::Pass {
            self.passes += 1;
        } else {
            self.passes = 0;
        }
        self.to_move = color.opponent();
        self.history.push(Turn {
            color,
            proposed,
            played,
            error,
            captured,
        });
        &self.history[self.history.len() - 1]
    }

    /// Play until consecutive passes or `max_moves` turns, whichever comes first.
    /// `None` uses the default limit for the board size.
    pub fn play(&mut self, max_moves: Option<usize>) -> GameSummary {
        let limit = max_moves.unwrap_or_else(|| max_game_len(self.board.size()));
        let stopped = loop {
            if self.passes >= PASSES_TO_STOP {
                break StopReason::ConsecutivePasses;
            }
            if self.history.len() >= limit {
                break StopReason::MoveLimit;
            }
            self.step();
        };
        info!(moves = self.history.len(), ?stopped, "game stopped");
        GameSummary {
            moves: self.history.len(),
            final_board: self.board.clone(),
            stopped,
        }
    }
}
