//! Constants for board dimensions, text glyphs and self-play limits.
//!
//! Board size is a runtime value (see [`Board::new`](crate::board::Board::new));
//! the values here are only defaults.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN) when none is given.
pub const DEFAULT_SIZE: usize = 5;

/// Orthogonal neighbour offsets as (row, col) deltas.
/// Order: North, East, South, West
pub const DELTA: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Seed for the Zobrist keys behind `Board::content_hash`.
pub const ZOBRIST_SEED: u64 = 0x5EED_0F60_B0A7;

// =============================================================================
// Text Glyphs
// =============================================================================

/// Empty intersection.
pub const GLYPH_EMPTY: char = '#';

/// Black stone.
pub const GLYPH_BLACK: char = 'B';

/// White stone.
pub const GLYPH_WHITE: char = 'W';

// =============================================================================
// Self-Play Limits
// =============================================================================

/// Move limit per board point for the play loop (3 times board area to allow for captures).
pub const MAX_GAME_LEN_FACTOR: usize = 3;

/// Number of consecutive passes that stops the play loop.
pub const PASSES_TO_STOP: usize = 2;

/// Maximum game length for a board of the given size.
pub const fn max_game_len(size: usize) -> usize {
    size * size * MAX_GAME_LEN_FACTOR
}
