//! Piece movement geometry, obstruction and capture rules.
//!
//! Nothing here looks at king safety; see [`super::safety`] for that.

use crate::Board;
use chess_core::{Color, Piece, Square};

/// Returns true if the piece on `from` may move to `to` by its movement
/// rules, with a clear path and a legal capture, ignoring check.
///
/// An empty `from` is never a legal move. Both squares must be on the board.
///
/// # Panics
///
/// Panics if `from` holds a pawn standing on either back rank. Pawns can
/// never get there by moving, so such a board is corrupt.
pub fn validate_geometry(board: &Board, from: Square, to: Square) -> bool {
    let Some(mover) = board.piece_at(from) else {
        return false;
    };
    if from == to {
        return false;
    }
    if board.piece_at(to).is_some_and(|target| target.color == mover.color) {
        return false;
    }

    let df = to.file() - from.file();
    let dr = to.rank() - from.rank();

    match mover.piece {
        Piece::King => df.abs().max(dr.abs()) == 1,
        Piece::Rook => (df == 0) != (dr == 0) && path_is_clear(board, from, to),
        Piece::Bishop => df.abs() == dr.abs() && path_is_clear(board, from, to),
        Piece::Queen => {
            ((df == 0) != (dr == 0) || df.abs() == dr.abs()) && path_is_clear(board, from, to)
        }
        Piece::Knight => matches!((df.abs(), dr.abs()), (1, 2) | (2, 1)),
        Piece::Pawn => pawn_move_is_valid(board, mover.color, from, to),
    }
}

/// Checks that every square strictly between `from` and `to` is empty.
///
/// The two squares must share a file, rank or diagonal.
fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let df = (to.file() - from.file()).signum();
    let dr = (to.rank() - from.rank()).signum();
    let mut sq = Square::from_coords(from.file() + df, from.rank() + dr);
    while sq != to {
        if !board.is_empty(sq) {
            return false;
        }
        sq = Square::from_coords(sq.file() + df, sq.rank() + dr);
    }
    true
}

fn pawn_move_is_valid(board: &Board, color: Color, from: Square, to: Square) -> bool {
    assert!(
        from.rank() != 0 && from.rank() != 7,
        "impossible pawn position: {}",
        from
    );

    let df = (to.file() - from.file()).abs();
    let forward = (to.rank() - from.rank()) * color.pawn_direction();

    // Promotion does not exist, so a pawn may not reach the far rank. The
    // attack oracle still counts a seventh-rank pawn as attacking the eighth:
    // the square is unreachable for the pawn but remains guarded by it.
    if to.rank() == color.opposite().back_rank() {
        return false;
    }

    match (df, forward) {
        (0, 1) => board.is_empty(to),
        (0, 2) => {
            from.rank() == color.pawn_rank()
                && board.is_empty(to)
                && path_is_clear(board, from, to)
        }
        (1, 1) => board
            .piece_at(to)
            .is_some_and(|target| target.color == color.opposite()),
        _ => false,
    }
}
