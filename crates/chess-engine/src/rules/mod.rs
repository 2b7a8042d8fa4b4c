//! Move legality.
//!
//! Legality is split in two layers that callers combine:
//! - [`validate_geometry`] decides whether a piece may physically make a move
//! - [`leaves_mover_in_check`] decides whether the move would expose the
//!   mover's king
//!
//! [`is_legal`] runs both.

mod geometry;
mod safety;

pub use geometry::validate_geometry;
pub use safety::{leaves_mover_in_check, SimulatedMove};

use crate::{Board, BoardError};
use chess_core::Square;

/// Returns true if the move obeys the piece's movement rules and keeps the
/// mover's king safe. Whose turn it is is not considered.
pub fn is_legal(board: &mut Board, from: Square, to: Square) -> Result<bool, BoardError> {
    if !validate_geometry(board, from, to) {
        return Ok(false);
    }
    Ok(!leaves_mover_in_check(board, from, to)?)
}
