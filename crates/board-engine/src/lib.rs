//! Chess board engine.
//!
//! This crate provides [`Board`], an 8x8 grid of owned pieces with a side
//! to move and the mutating operations of the game: plain moves, pawn
//! promotion, and castling. Per-piece legality lives in the private
//! `rules` module; every mutating operation validates fully before
//! touching the grid and reports the outcome as a plain `bool`, where
//! `false` means "illegal, nothing changed".
//!
//! The engine performs no I/O and offers no internal synchronization;
//! callers serialize access to a `Board`.
//!
//! # Example
//!
//! ```
//! use board_core::Square;
//! use board_engine::Board;
//!
//! let mut board = Board::new();
//! let from = Square::new(1, 4).unwrap();
//! let to = Square::new(3, 4).unwrap();
//! assert!(board.move_piece(from, to));
//! println!("{}", board);
//! ```

mod board;
mod rules;

pub use board::Board;
