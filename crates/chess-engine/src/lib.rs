//! Chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - 8x8 mailbox of optional pieces
//! - [`square_attacked_by`] - the attack oracle used for check detection
//! - [`validate_geometry`] - movement, obstruction and capture rules per piece
//! - [`leaves_mover_in_check`] - king safety by simulate-and-restore
//! - [`Position`] - board plus side to move, with validated move application
//! - [`generate_legal_moves`] - every legal move for the side to move
//!
//! Castling, en passant, promotion and draw rules are not part of the game
//! played here.
//!
//! # Example
//!
//! ```
//! use chess_engine::Position;
//!
//! let mut position = Position::startpos();
//! position.apply_notation("e2-e4").unwrap();
//! position.apply_notation("e7-e5").unwrap();
//! let moves = position.legal_moves().unwrap();
//! println!("White has {} legal moves", moves.len());
//! println!("{}", position.board());
//! ```

mod board;
mod error;
pub mod movegen;
mod position;
pub mod rules;

pub use board::{Board, EMPTY_GLYPH};
pub use error::{BoardError, MoveError};
pub use movegen::{generate_legal_moves, square_attacked_by, LegalMoves};
pub use position::Position;
pub use rules::{is_legal, leaves_mover_in_check, validate_geometry};
