//! Core board data structure for the linelock game.
//!
//! This crate provides the playing board: an N×N grid of cells where each cell
//! holds either 0 (empty) or a value in `1..=N`, together with a per-cell lock
//! flag. The board enforces the game's one structural rule incrementally: no
//! nonzero value may appear twice in the same row or column.
//!
//! The board knows nothing about game flow, events, or rendering; those live
//! in higher-level crates. See [`Board`] for the full mutation contract.
//!
//! # Examples
//!
//! ```
//! use linelock_board::Board;
//!
//! let mut board = Board::new(2);
//! board.step_value(0, 0)?; // empty -> 1
//! board.step_value(0, 1)?; // 1 conflicts in row 0, lands on 2
//! assert_eq!(board.value(0, 0)?, 1);
//! assert_eq!(board.value(0, 1)?, 2);
//! # Ok::<(), linelock_board::BoardError>(())
//! ```

pub mod board;
pub mod error;

pub use self::{board::Board, error::BoardError};
