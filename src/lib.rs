//! Gobot-Core: Go rules engine for small boards.
//!
//! This crate implements stone placement, group and liberty analysis,
//! captures, suicide prevention and a single-step repetition guard on an
//! N×N board. Decision logic is kept out: players plug in behind the
//! [`player::Player`] trait and every proposal goes through the legality
//! pipeline in [`rules`].
//!
//! ## Modules
//!
//! - [`constants`] - Default size, text glyphs and self-play limits
//! - [`board`] - Board grid, colors, coordinates and text export
//! - [`group`] - Group and liberty analysis
//! - [`capture`] - Capture sweep
//! - [`rules`] - Moves, errors and the legality pipeline
//! - [`player`] - Player trait and a random reference player
//! - [`game`] - Play loop alternating two players
//!
//! ## Example
//!
//! ```
//! use gobot_core::board::{Board, Cell, Color};
//! use gobot_core::rules::{Move, MoveError};
//!
//! let mut board = Board::new(5);
//! board.perform_move(Move::Place(2, 2), Color::Black).unwrap();
//! assert_eq!(board.get((2, 2)), Cell::Black);
//!
//! let err = board.perform_move(Move::Place(2, 2), Color::White).unwrap_err();
//! assert_eq!(err, MoveError::CellNotEmpty { row: 2, col: 2 });
//! ```

pub mod board;
pub mod capture;
pub mod constants;
pub mod game;
pub mod group;
pub mod player;
pub mod rules;
