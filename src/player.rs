//! Players propose moves; the rules decide whether they stand.
//!
//! Any decision logic (search, learned tables, human input, remote services)
//! plugs in behind [`Player`]. Proposals are never trusted: the play loop
//! always validates them through [`perform_move`](crate::rules::perform_move).

use std::io::{self, BufRead, Write};

use tracing::{trace, warn};

use crate::board::{Board, Color};
use crate::rules::{Move, Rules, is_legal_with, perform_move_with};

pub trait Player {
    fn name(&self) -> &str;

    fn color(&self) -> Color;

    /// Choose a move for the given position. Must not assume the board
    /// outlives the call; copy it if needed.
    fn propose_move(&mut self, board: &Board) -> Move;
}

/// Picks uniformly among empty cells and pass, keeping the first candidate
/// that is legal on a scratch copy of the board.
pub struct RandomPlayer {
    color: Color,
    rules: Rules,
    rng: fastrand::Rng,
}

impl RandomPlayer {
    pub fn new(color: Color) -> Self {
        Self::with_rng(color, fastrand::Rng::new())
    }

    /// Deterministic player for reproducible games.
    pub fn seeded(color: Color, seed: u64) -> Self {
        Self::with_rng(color, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(color: Color, rng: fastrand::Rng) -> Self {
        Self {
            color,
            rules: Rules::default(),
            rng,
        }
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "random"
    }

    fn color(&self) -> Color {
        self.color
    }

    fn propose_move(&mut self, board: &Board) -> Move {
        let mut candidates: Vec<Move> = board.empty_cells().into_iter().map(Move::at).collect();
        candidates.push(Move::Pass);

        // Partial Fisher-Yates: draw without replacement until a legal move turns up.
        let n = candidates.len();
        for i in 0..n {
            let j = self.rng.usize(i..n);
            candidates.swap(i, j);
            let mv = candidates[i];
            if is_legal_with(board, mv, self.color, &self.rules) {
                trace!(color = %self.color, %mv, tried = i + 1, "random proposal");
                return mv;
            }
        }
        Move::Pass
    }
}

/// Always passes.
pub struct PassPlayer {
    color: Color,
}

impl PassPlayer {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Player for PassPlayer {
    fn name(&self) -> &str {
        "pass"
    }

    fn color(&self) -> Color {
        self.color
    }

    fn propose_move(&mut self, _board: &Board) -> Move {
        Move::Pass
    }
}

/// Reads moves as `row col` or `pass`, one per line, and asks again until
/// the move is legal. End of input or a read error counts as a pass.
pub struct HumanPlayer<R, W> {
    color: Color,
    rules: Rules,
    input: R,
    output: W,
}

impl HumanPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player on the process's stdin and stdout.
    pub fn stdio(color: Color) -> Self {
        Self::new(color, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(color: Color, input: R, output: W) -> Self {
        Self {
            color,
            rules: Rules::default(),
            input,
            output,
        }
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    fn prompt(&mut self, board: &Board) -> io::Result<()> {
        writeln!(self.output, "{board}")?;
        write!(self.output, "{} to move (row col, or pass): ", self.color)?;
        self.output.flush()
    }

    fn read_move(&mut self, board: &Board) -> io::Result<Option<Move>> {
        loop {
            self.prompt(board)?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let mv = match parse_move(&line) {
                Some(mv) => mv,
                None => {
                    writeln!(self.output, "could not read {:?}", line.trim())?;
                    continue;
                }
            };
            let mut scratch = board.clone();
            match perform_move_with(&mut scratch, mv, self.color, &self.rules) {
                Ok(_) => return Ok(Some(mv)),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        "human"
    }

    fn color(&self) -> Color {
        self.color
    }

    fn propose_move(&mut self, board: &Board) -> Move {
        match self.read_move(board) {
            Ok(Some(mv)) => mv,
            Ok(None) => Move::Pass,
            Err(e) => {
                warn!(color = %self.color, error = %e, "input failed, passing");
                Move::Pass
            }
        }
    }
}

/// Parse `pass` (any case) or two signed integers separated by whitespace or a comma.
pub fn parse_move(s: &str) -> Option<Move> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("pass") {
        return Some(Move::Pass);
    }
    let mut parts = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Move::Place(row, col))
}
