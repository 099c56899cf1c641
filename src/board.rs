//! Square board of cells with row-major storage.
//!
//! The board only knows about occupancy. Groups, liberties, captures and move
//! legality live in [`group`](crate::group), [`capture`](crate::capture) and
//! [`rules`](crate::rules).

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{DEFAULT_SIZE, DELTA, GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE, ZOBRIST_SEED};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Occupancy of a single intersection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// The stone color on this cell, or `None` if empty.
    pub fn stone(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => GLYPH_EMPTY,
            Cell::Black => GLYPH_BLACK,
            Cell::White => GLYPH_WHITE,
        }
    }

    fn from_glyph(ch: char) -> Option<Cell> {
        match ch {
            GLYPH_EMPTY => Some(Cell::Empty),
            GLYPH_BLACK => Some(Cell::Black),
            GLYPH_WHITE => Some(Cell::White),
            _ => None,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// A point on the board as zero-based `(row, col)`.
pub type Coord = (usize, usize);

/// Errors raised when building a board from a grid or text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("grid has no rows")]
    Empty,

    #[error("grid is not square: row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    #[error("unknown glyph {glyph:?} at row {row}")]
    BadGlyph { glyph: char, row: usize },
}

/// A square Go board. Equality and hashing consider the grid contents only.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl Board {
    /// Create an empty `size` x `size` board.
    ///
    /// # Panics
    /// If `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Restore a board from a grid snapshot. The size is inferred from the grid.
    pub fn from_grid(grid: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let size = grid.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in grid.into_iter().enumerate() {
            if line.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: line.len(),
                    size,
                });
            }
            cells.extend(line);
        }
        Ok(Self { size, cells })
    }

    /// Construction entry point: restore from `grid` when given, otherwise
    /// create an empty board of `size`.
    pub fn with_size_or_grid(size: usize, grid: Option<Vec<Vec<Cell>>>) -> Result<Self, BoardError> {
        match grid {
            Some(grid) => Self::from_grid(grid),
            None => Ok(Self::new(size)),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, (row, col): Coord) -> usize {
        assert!(
            row < self.size && col < self.size,
            "coordinate ({row}, {col}) outside {0}x{0} board",
            self.size
        );
        row * self.size + col
    }

    /// Whether a signed coordinate lies on the board.
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Cell at `coord`.
    ///
    /// # Panics
    /// If `coord` is outside the board.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[self.idx(coord)]
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        let i = self.idx(coord);
        self.cells[i] = cell;
    }

    /// In-bounds orthogonal neighbours of `coord` (N, E, S, W order).
    ///
    /// # Panics
    /// If `coord` is outside the board.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.idx(coord);
        let (row, col) = coord;
        DELTA.iter().filter_map(move |&(dr, dc)| {
            let (r, c) = (row as isize + dr, col as isize + dc);
            self.contains(r, c).then_some((r as usize, c as usize))
        })
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
    }

    /// Empty coordinates in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.coords().filter(|&c| self.get(c).is_empty()).collect()
    }

    /// Read-only view of the grid, one slice per row.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Number of stones of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        let cell = Cell::from(color);
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Zobrist hash of the grid contents: equal boards hash equal.
    ///
    /// Keys are derived from a fixed seed, so values are stable across runs
    /// and toolchains and can key persisted lookup tables.
    pub fn content_hash(&self) -> u64 {
        self.cells
            .iter()
            .enumerate()
            .fold(splitmix64(self.size as u64), |h, (i, cell)| match cell {
                Cell::Empty => h,
                Cell::Black => h ^ splitmix64(ZOBRIST_SEED ^ (i as u64 * 2)),
                Cell::White => h ^ splitmix64(ZOBRIST_SEED ^ (i as u64 * 2 + 1)),
            })
    }
}

fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

impl Index<Coord> for Board {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Cell {
        &self.cells[self.idx(coord)]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.glyph())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse the [`Display`](fmt::Display) format. Blank lines are skipped
    /// and whitespace between glyphs is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Vec::new();
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row = grid.len();
            let cells = line
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .map(|glyph| Cell::from_glyph(glyph).ok_or(BoardError::BadGlyph { glyph, row }))
                .collect::<Result<Vec<_>, _>>()?;
            grid.push(cells);
        }
        Self::from_grid(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(7);
        assert_eq!(board.size(), 7);
        assert_eq!(board.empty_cells().len(), 49);
        assert_eq!(board.count(Color::Black), 0);
    }

    #[test]
    fn test_default_size() {
        assert_eq!(Board::default().size(), DEFAULT_SIZE);
    }

    #[test]
    #[should_panic]
    fn test_zero_size_panics() {
        let _ = Board::new(0);
    }

    #[test]
    fn test_from_grid_infers_size() {
        let grid = vec![vec![Cell::Empty, Cell::Black], vec![Cell::White, Cell::Empty]];
        let board = Board::from_grid(grid).unwrap();
        assert_eq!(board.size(), 2);
        assert_eq!(board.get((0, 1)), Cell::Black);
        assert_eq!(board[(1, 0)], Cell::White);
    }

    #[test]
    fn test_from_grid_rejects_ragged() {
        let grid = vec![vec![Cell::Empty, Cell::Empty], vec![Cell::Empty]];
        assert_eq!(
            Board::from_grid(grid),
            Err(BoardError::NotSquare { row: 1, len: 1, size: 2 })
        );
        assert_eq!(Board::from_grid(Vec::new()), Err(BoardError::Empty));
    }

    #[test]
    fn test_with_size_or_grid_prefers_grid() {
        let grid = vec![vec![Cell::Empty; 3]; 3];
        let board = Board::with_size_or_grid(9, Some(grid)).unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(Board::with_size_or_grid(4, None).unwrap().size(), 4);
    }

    #[test]
    fn test_contains() {
        let board = Board::new(5);
        assert!(board.contains(0, 0));
        assert!(board.contains(4, 4));
        assert!(!board.contains(-1, 0));
        assert!(!board.contains(0, 5));
        assert!(!board.contains(5, 0));
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_bounds_panics() {
        let board = Board::new(5);
        let _ = board.get((5, 0));
    }

    #[test]
    fn test_neighbors_corner_edge_center() {
        let board = Board::new(5);
        assert_eq!(board.neighbors((0, 0)).count(), 2);
        assert_eq!(board.neighbors((0, 2)).count(), 3);
        let center: Vec<_> = board.neighbors((2, 2)).collect();
        assert_eq!(center, vec![(1, 2), (2, 3), (3, 2), (2, 1)]);
    }

    #[test]
    #[should_panic]
    fn test_neighbors_off_board_panics() {
        let board = Board::new(5);
        let _ = board.neighbors((5, 4)).count();
    }

    #[test]
    fn test_display_and_parse() {
        let mut board = Board::new(3);
        board.set((0, 0), Cell::Black);
        board.set((2, 1), Cell::White);
        let text = board.to_string();
        assert_eq!(text, "B # #\n# # #\n# W #");
        assert_eq!(text.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_bad_glyph() {
        let err = "B#\n#x".parse::<Board>().unwrap_err();
        assert_eq!(err, BoardError::BadGlyph { glyph: 'x', row: 1 });
    }

    #[test]
    fn test_equality_and_hash_follow_contents() {
        let a: Board = "B##\n###\n##W".parse().unwrap();
        let b: Board = "B # #\n# # #\n# # W".parse().unwrap();
        let c: Board = "B##\n###\n###".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.content_hash(), b.content_hash());
        assert_ne!(a, c);
        assert_ne!(a.content_hash(), c.content_hash());
    }

    #[test]
    fn test_content_hash_is_pinned() {
        let mut board = Board::new(5);
        assert_eq!(board.content_hash(), 0x6303_3b0c_a389_c35a);
        board.set((2, 2), Cell::Black);
        assert_eq!(board.content_hash(), 0xe3f4_3f97_3be1_445e);
        board.set((2, 2), Cell::Empty);
        assert_eq!(board.content_hash(), Board::new(5).content_hash());
        assert_ne!(Board::new(4).content_hash(), Board::new(5).content_hash());
    }

    #[test]
    fn test_rows_export() {
        let board: Board = "BW\n#B".parse().unwrap();
        let rows: Vec<Vec<Cell>> = board.rows().map(<[Cell]>::to_vec).collect();
        assert_eq!(
            rows,
            vec![vec![Cell::Black, Cell::White], vec![Cell::Empty, Cell::Black]]
        );
    }
}
