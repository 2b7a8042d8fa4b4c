//! Error types for board queries and move application.

use chess_core::{Color, NotationError, Square};
use thiserror::Error;

/// Errors raised by board lookups.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("{0}'s king not found")]
    KingNotFound(Color),
}

/// Reasons a move can be refused by [`Position::apply_move`](crate::Position::apply_move).
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error(transparent)]
    Malformed(#[from] NotationError),

    #[error("square {0} is out of bounds")]
    OutOfBounds(Square),

    #[error("target square is the same as the origin square")]
    NullMove,

    #[error("square {0} is empty")]
    EmptySource(Square),

    #[error("not {0}'s turn")]
    WrongTurn(Color),

    #[error("invalid move from {from} to {to}")]
    IllegalGeometry { from: Square, to: Square },

    #[error("invalid move from {from} to {to}, king is left in check")]
    ExposesKing { from: Square, to: Square },

    #[error("{0}'s king not found")]
    KingNotFound(Color),
}

impl MoveError {
    /// Returns true for ordinary rule rejections.
    ///
    /// `KingNotFound` means the board itself is unusable and is the only
    /// variant for which this returns false.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, MoveError::KingNotFound(_))
    }
}

impl From<BoardError> for MoveError {
    fn from(e: BoardError) -> Self {
        match e {
            BoardError::KingNotFound(color) => MoveError::KingNotFound(color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn king_not_found_is_not_a_rejection() {
        assert!(!MoveError::from(BoardError::KingNotFound(Color::White)).is_rejection());
        assert!(MoveError::NullMove.is_rejection());
        assert!(MoveError::WrongTurn(Color::Black).is_rejection());
    }

    #[test]
    fn messages() {
        let e4 = Square::from_algebraic("e4").unwrap();
        let e5 = Square::from_algebraic("e5").unwrap();
        assert_eq!(MoveError::EmptySource(e4).to_string(), "square e4 is empty");
        assert_eq!(MoveError::WrongTurn(Color::Black).to_string(), "not Black's turn");
        assert_eq!(
            MoveError::ExposesKing { from: e4, to: e5 }.to_string(),
            "invalid move from e4 to e5, king is left in check"
        );
        assert_eq!(
            BoardError::KingNotFound(Color::White).to_string(),
            "White's king not found"
        );
        let malformed = MoveError::from(NotationError::Malformed("xyz".into()));
        assert!(malformed.to_string().contains("\"xyz\""));
    }
}
