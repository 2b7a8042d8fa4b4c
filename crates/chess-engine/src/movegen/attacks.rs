//! Direction tables and the square attack oracle.

use crate::Board;
use chess_core::{Color, Piece, Square};

/// File/rank steps along files and ranks.
pub const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// File/rank steps along diagonals.
pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// The eight knight jumps.
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// The eight king steps (every orthogonal and diagonal neighbour).
pub const KING_STEPS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Iterates over the squares of a ray starting next to `from`, stopping at
/// the board edge. Blockers are not considered.
pub fn ray(from: Square, (df, dr): (i8, i8)) -> impl Iterator<Item = Square> {
    std::iter::successors(from.offset(df, dr), move |sq| sq.offset(df, dr))
}

/// Returns true if `attacker` has a piece that could capture on `sq`.
///
/// Whose turn it is and whether the attacker's own king would be exposed
/// are both ignored. Candidate squares off the board are skipped, so any
/// `sq` is accepted, including off-board ones.
pub fn square_attacked_by(board: &Board, sq: Square, attacker: Color) -> bool {
    attacked_along(board, sq, attacker, &ORTHOGONALS, Piece::moves_orthogonally)
        || attacked_along(board, sq, attacker, &DIAGONALS, Piece::moves_diagonally)
        || attacked_by_pawn(board, sq, attacker)
        || attacked_by_knight(board, sq, attacker)
}

/// Walks each ray outward from `sq`. The first piece met ends the ray; it
/// attacks if it belongs to `attacker` and either slides this way or is a
/// king standing adjacent.
fn attacked_along(
    board: &Board,
    sq: Square,
    attacker: Color,
    directions: &[(i8, i8)],
    slides: fn(Piece) -> bool,
) -> bool {
    directions.iter().any(|&dir| {
        ray(sq, dir)
            .enumerate()
            .find_map(|(i, s)| board.piece_at(s).map(|cp| (i + 1, cp)))
            .is_some_and(|(distance, cp)| {
                cp.color == attacker
                    && (slides(cp.piece) || (distance == 1 && cp.piece == Piece::King))
            })
    })
}

/// Pawns attack one row forward, so a pawn attacking `sq` stands one row
/// behind it from the attacker's point of view.
fn attacked_by_pawn(board: &Board, sq: Square, attacker: Color) -> bool {
    let dr = -attacker.pawn_direction();
    [-1, 1].into_iter().any(|df| {
        sq.offset(df, dr)
            .and_then(|s| board.piece_at(s))
            .is_some_and(|cp| cp.is(Piece::Pawn, attacker))
    })
}

fn attacked_by_knight(board: &Board, sq: Square, attacker: Color) -> bool {
    KNIGHT_JUMPS.iter().any(|&(df, dr)| {
        sq.offset(df, dr)
            .and_then(|s| board.piece_at(s))
            .is_some_and(|cp| cp.is(Piece::Knight, attacker))
    })
}
