//! Core types for chess.
//!
//! This crate provides the value types shared by the engine and its front ends:
//! - [`Piece`], [`ColoredPiece`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Move`] and its `e2-e4` notation
//! - FEN placement parsing and serialization

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{Fen, FenError};
pub use mov::{Move, NotationError};
pub use piece::{ColoredPiece, Piece};
pub use square::{File, Rank, Square};
