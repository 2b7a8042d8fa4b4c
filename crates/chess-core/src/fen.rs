//! FEN (Forsyth-Edwards Notation) placement parsing and serialization.
//!
//! Only the piece placement and side-to-move fields carry meaning here.
//! Castling rights, en passant and the move clocks are accepted when
//! present and otherwise ignored, and are always written as `- - 0 1`.

use crate::{Color, ColoredPiece, Piece, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 2 to 6 fields, got {0}")]
    InvalidFieldCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),
}

/// Parsed FEN data: one cell per square plus the side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    /// Cells indexed by [`Square::index`] (a1 = 0, h8 = 63).
    pub cells: [Option<ColoredPiece>; 64],
    /// The side to move.
    pub side_to_move: Color,
}

impl Fen {
    /// The standard starting position.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if !(2..=6).contains(&parts.len()) {
            return Err(FenError::InvalidFieldCount(parts.len()));
        }

        let cells = Self::parse_placement(parts[0])?;
        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        Ok(Fen {
            cells,
            side_to_move,
        })
    }

    fn parse_placement(placement: &str) -> Result<[Option<ColoredPiece>; 64], FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut cells = [None; 64];
        for (i, rank_str) in ranks.iter().enumerate() {
            // FEN lists rank 8 first.
            let rank = 7 - i as i8;
            let mut file = 0i8;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as i8;
                } else if let Some(cp) = ColoredPiece::from_fen_char(c) {
                    if cp.piece == Piece::Pawn && (rank == 0 || rank == 7) {
                        return Err(FenError::InvalidPiecePlacement(format!(
                            "pawn on back rank {}",
                            rank + 1
                        )));
                    }
                    let sq = Square::from_coords(file, rank);
                    if sq.is_on_board() {
                        cells[sq.index()] = Some(cp);
                    }
                    file += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        rank + 1
                    )));
                }
                if file > 8 {
                    break;
                }
            }
            if file != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    rank + 1,
                    file
                )));
            }
        }

        Ok(cells)
    }

    /// Converts back to a FEN string.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in (0..8).rev() {
            let mut empty_count = 0;
            for file in 0..8 {
                let sq = Square::from_coords(file, rank);
                match self.cells[sq.index()] {
                    Some(cp) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(cp.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(self.side_to_move.to_fen_char());
        fen.push_str(" - - 0 1");
        fen
    }
}
