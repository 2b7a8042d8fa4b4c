//! King-safety check by hypothetically playing a move on the board.

use std::ops::Deref;

use crate::movegen::square_attacked_by;
use crate::{Board, BoardError};
use chess_core::{ColoredPiece, Piece, Square};

/// A move played on a borrowed board, undone when the guard is dropped.
///
/// Both touched squares get their exact previous contents back, including
/// any captured piece, on every exit path.
pub struct SimulatedMove<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    moved: Option<ColoredPiece>,
    captured: Option<ColoredPiece>,
}

impl<'a> SimulatedMove<'a> {
    /// Moves the contents of `from` onto `to`, leaving `from` empty.
    pub fn play(board: &'a mut Board, from: Square, to: Square) -> Self {
        let captured = board.piece_at(to);
        let moved = board.remove(from);
        board.set(to, moved);
        SimulatedMove {
            board,
            from,
            to,
            moved,
            captured,
        }
    }
}

impl Deref for SimulatedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        self.board.set(self.to, self.captured);
        self.board.set(self.from, self.moved);
    }
}

/// Returns true if moving the piece on `from` to `to` would leave its
/// owner's king attacked.
///
/// The board is mutated while the question is answered and restored before
/// returning. The king is located before the move is tried, so a board
/// without a king of the mover's color yields [`BoardError::KingNotFound`]
/// and is never touched. An empty `from` cannot expose anything.
pub fn leaves_mover_in_check(board: &mut Board, from: Square, to: Square) -> Result<bool, BoardError> {
    let Some(mover) = board.piece_at(from) else {
        return Ok(false);
    };
    let king_square = if mover.piece == Piece::King {
        to
    } else {
        board.find_king(mover.color)?
    };

    let simulated = SimulatedMove::play(board, from, to);
    Ok(square_attacked_by(
        &simulated,
        king_square,
        mover.color.opposite(),
    ))
}
