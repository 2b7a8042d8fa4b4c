//! Move generation.
//!
//! This module provides legal move generation by walking each piece's
//! rays and jumps, then dropping moves that leave the mover's king in check.

mod attacks;
pub mod perft;

use std::collections::{HashMap, HashSet};

use crate::rules::{leaves_mover_in_check, validate_geometry};
use crate::{Board, BoardError, Position};
use chess_core::{ColoredPiece, Move, Piece, Square};

pub use attacks::{
    ray, square_attacked_by, DIAGONALS, KING_STEPS, KNIGHT_JUMPS, ORTHOGONALS,
};

/// All legal moves of one side, grouped by origin square.
///
/// Origins without a legal destination are absent. Neither origins nor
/// destinations are ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoves {
    by_origin: HashMap<Square, HashSet<Square>>,
}

impl LegalMoves {
    /// Returns the destinations reachable from `from`, if any.
    #[inline]
    pub fn destinations(&self, from: Square) -> Option<&HashSet<Square>> {
        self.by_origin.get(&from)
    }

    /// Returns true if `m` is among the legal moves.
    pub fn contains(&self, m: Move) -> bool {
        self.by_origin
            .get(&m.from)
            .is_some_and(|tos| tos.contains(&m.to))
    }

    /// Returns the total number of moves.
    pub fn len(&self) -> usize {
        self.by_origin.values().map(HashSet::len).sum()
    }

    /// Returns true if there are no legal moves.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_origin.is_empty()
    }

    /// Iterates over all moves in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.by_origin
            .iter()
            .flat_map(|(&from, tos)| tos.iter().map(move |&to| Move::new(from, to)))
    }

    /// Returns all moves sorted by origin, then destination.
    pub fn to_sorted_vec(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = self.iter().collect();
        moves.sort();
        moves
    }

    /// Returns the underlying origin-to-destinations map.
    #[inline]
    pub fn as_map(&self) -> &HashMap<Square, HashSet<Square>> {
        &self.by_origin
    }
}

/// Generates all legal moves for the side to move.
///
/// Fails with [`BoardError::KingNotFound`] when the side to move has
/// pieces but no king, since no move could then be checked for safety.
pub fn generate_legal_moves(position: &Position) -> Result<LegalMoves, BoardError> {
    let us = position.side_to_move();
    let mut scratch = position.board().clone();
    let mut by_origin = HashMap::new();

    let own: Vec<(Square, ColoredPiece)> = position.board().pieces_of(us).collect();
    for (from, piece) in own {
        let mut legal = HashSet::new();
        for to in pseudo_legal_destinations(position.board(), from, piece) {
            if !leaves_mover_in_check(&mut scratch, from, to)? {
                legal.insert(to);
            }
        }
        if !legal.is_empty() {
            by_origin.insert(from, legal);
        }
    }

    Ok(LegalMoves { by_origin })
}

/// Destinations the piece on `from` could reach ignoring king safety.
fn pseudo_legal_destinations(board: &Board, from: Square, piece: ColoredPiece) -> Vec<Square> {
    let mut out = Vec::new();
    let open = |to: Square| board.piece_at(to).map_or(true, |cp| cp.color != piece.color);

    match piece.piece {
        Piece::King => out.extend(steps(from, &KING_STEPS).filter(|&to| open(to))),
        Piece::Knight => out.extend(steps(from, &KNIGHT_JUMPS).filter(|&to| open(to))),
        Piece::Pawn => {
            let dr = piece.color.pawn_direction();
            let candidates = [(0, dr), (0, 2 * dr), (-1, dr), (1, dr)];
            out.extend(
                steps(from, &candidates).filter(|&to| validate_geometry(board, from, to)),
            );
        }
        Piece::Bishop | Piece::Rook | Piece::Queen => {
            let mut directions = Vec::with_capacity(8);
            if piece.piece.moves_orthogonally() {
                directions.extend_from_slice(&ORTHOGONALS);
            }
            if piece.piece.moves_diagonally() {
                directions.extend_from_slice(&DIAGONALS);
            }
            for dir in directions {
                for to in ray(from, dir) {
                    match board.piece_at(to) {
                        None => out.push(to),
                        Some(cp) => {
                            if cp.color != piece.color {
                                out.push(to);
                            }
                            break;
                        }
                    }
                }
            }
        }
    }

    out
}

fn steps<'a>(from: Square, offsets: &'a [(i8, i8)]) -> impl Iterator<Item = Square> + 'a {
    offsets.iter().filter_map(move |&(df, dr)| from.offset(df, dr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Color;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn dests(moves: &LegalMoves, from: &str) -> Vec<String> {
        let mut v: Vec<String> = moves
            .destinations(sq(from))
            .map(|set| set.iter().map(|s| s.to_string()).collect())
            .unwrap_or_default();
        v.sort();
        v
    }

    #[test]
    fn startpos_has_twenty_moves() {
        let moves = generate_legal_moves(&Position::startpos()).unwrap();
        assert_eq!(moves.len(), 20);
        // Only pawns and knights can move; other origins are omitted.
        assert_eq!(moves.as_map().len(), 10);
        assert_eq!(dests(&moves, "b1"), vec!["a3", "c3"]);
        assert!(moves.destinations(sq("e1")).is_none());
    }

    #[test]
    fn black_to_move() {
        let mut pos = Position::startpos();
        pos.apply_notation("e2-e4").unwrap();
        let moves = generate_legal_moves(&pos).unwrap();
        assert_eq!(moves.len(), 20);
        assert!(moves.iter().all(|m| m.from.rank() >= 6));
    }

    #[test]
    fn lone_king_in_the_middle() {
        let pos = Position::from_fen("8/8/8/8/4K3/8/8/8 w").unwrap();
        let moves = generate_legal_moves(&pos).unwrap();
        assert_eq!(
            dests(&moves, "e4"),
            vec!["d3", "d4", "d5", "e3", "e5", "f3", "f4", "f5"]
        );
    }

    #[test]
    fn king_against_rook() {
        let pos = Position::from_fen("8/8/8/4r3/4K3/8/8/8 w").unwrap();
        let moves = generate_legal_moves(&pos).unwrap();
        assert_eq!(dests(&moves, "e4"), vec!["d3", "d4", "e5", "f3", "f4"]);
    }

    #[test]
    fn pinned_rook_moves_along_pin() {
        let pos = Position::from_fen("4r3/8/8/8/8/8/4R3/4K3 w").unwrap();
        let moves = generate_legal_moves(&pos).unwrap();
        assert_eq!(
            dests(&moves, "e2"),
            vec!["e3", "e4", "e5", "e6", "e7", "e8"]
        );
    }

    #[test]
    fn checkmate_has_no_moves() {
        let mut pos = Position::startpos();
        for m in ["f2-f3", "e7-e5", "g2-g4", "d8-h4"] {
            pos.apply_notation(m).unwrap();
        }
        assert_eq!(pos.is_in_check(), Ok(true));
        assert!(generate_legal_moves(&pos).unwrap().is_empty());
    }

    #[test]
    fn missing_king_fails() {
        let pos = Position::from_fen("8/8/8/8/4R3/8/8/8 w").unwrap();
        assert_eq!(
            generate_legal_moves(&pos),
            Err(BoardError::KingNotFound(Color::White))
        );
    }

    #[test]
    fn no_pieces_means_no_moves() {
        let pos = Position::from_fen("8/8/8/8/8/8/8/8 b").unwrap();
        assert!(generate_legal_moves(&pos).unwrap().is_empty());
    }

    #[test]
    fn sorted_and_contains() {
        let moves = generate_legal_moves(&Position::startpos()).unwrap();
        let sorted = moves.to_sorted_vec();
        assert_eq!(sorted.len(), 20);
        assert_eq!(sorted[0].to_string(), "a2-a3");
        assert!(moves.contains("g1-f3".parse().unwrap()));
        assert!(!moves.contains("e2-e5".parse().unwrap()));
    }
}
