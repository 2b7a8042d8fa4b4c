//! 8x8 mailbox board.

use chess_core::{Color, ColoredPiece, Piece, Square};
use std::fmt;

use crate::BoardError;

/// Glyph used for empty squares in [`Board::render`].
pub const EMPTY_GLYPH: char = '·';

/// An 8x8 grid of optional pieces, indexed by [`Square::index`].
///
/// Every lookup takes an on-board square; passing an off-board square is a
/// caller bug and panics.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<ColoredPiece>; 64],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    /// Creates a board holding the standard opening array.
    pub fn starting() -> Self {
        let mut board = Board::empty();
        board.set_starting_position();
        board
    }

    /// Creates a board from raw cells (a1 = 0, h8 = 63).
    pub const fn from_cells(cells: [Option<ColoredPiece>; 64]) -> Self {
        Board { cells }
    }

    /// Returns the raw cells (a1 = 0, h8 = 63).
    #[inline]
    pub fn cells(&self) -> &[Option<ColoredPiece>; 64] {
        &self.cells
    }

    /// Sets every square to empty.
    pub fn clear(&mut self) {
        self.cells = [None; 64];
    }

    /// Clears the board and places the standard 32 pieces.
    pub fn set_starting_position(&mut self) {
        self.clear();
        for color in Color::ALL {
            for (file, piece) in Piece::BACK_RANK.into_iter().enumerate() {
                let file = file as i8;
                self.put(
                    Square::from_coords(file, color.back_rank()),
                    ColoredPiece::new(piece, color),
                );
                self.put(
                    Square::from_coords(file, color.pawn_rank()),
                    ColoredPiece::new(Piece::Pawn, color),
                );
            }
        }
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        self.cells[sq.index()]
    }

    /// Returns true if `sq` holds no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Overwrites the contents of `sq`.
    #[inline]
    pub fn set(&mut self, sq: Square, cell: Option<ColoredPiece>) {
        self.cells[sq.index()] = cell;
    }

    /// Places `piece` on `sq`, replacing whatever was there.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: ColoredPiece) {
        self.set(sq, Some(piece));
    }

    /// Empties `sq`, returning the piece that stood there.
    #[inline]
    pub fn remove(&mut self, sq: Square) -> Option<ColoredPiece> {
        self.cells[sq.index()].take()
    }

    /// Iterates over the occupied squares owned by `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(cp) if cp.color == color => Some((sq, cp)),
            _ => None,
        })
    }

    /// Returns the square of `color`'s king.
    ///
    /// Scans a1 to h8 and returns the first match, so a board with several
    /// kings of one color reports the lowest-indexed one.
    pub fn find_king(&self, color: Color) -> Result<Square, BoardError> {
        Square::all()
            .find(|&sq| {
                self.piece_at(sq)
                    .is_some_and(|cp| cp.is(Piece::King, color))
            })
            .ok_or(BoardError::KingNotFound(color))
    }

    /// Renders the board as text, rank 8 at the top.
    ///
    /// Pieces are Unicode glyphs, empty squares are [`EMPTY_GLYPH`], and
    /// cells are separated by a single space. With labels, every rank is
    /// prefixed by its number and a file footer is appended.
    pub fn render(&self, with_labels: bool) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            if rank < 7 {
                out.push('\n');
            }
            if with_labels {
                out.push_str(&format!("{} ", rank + 1));
            }
            let row: Vec<String> = (0..8)
                .map(|file| {
                    self.piece_at(Square::from_coords(file, rank))
                        .map_or(EMPTY_GLYPH, ColoredPiece::glyph)
                        .to_string()
                })
                .collect();
            out.push_str(&row.join(" "));
        }
        if with_labels {
            out.push_str("\n  a b c d e f g h");
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board(")?;
        writeln!(f, "{}", self.render(true))?;
        write!(f, ")")
    }
}
