//! Chess position: a board plus the side to move.

use chess_core::{Color, Fen, FenError, Move, Square};

use crate::movegen::{generate_legal_moves, square_attacked_by, LegalMoves};
use crate::rules::{leaves_mover_in_check, validate_geometry};
use crate::{Board, BoardError, MoveError};

/// Game state: piece placement and whose turn it is.
///
/// The position owns its board outright. The only way to change it is
/// [`Position::apply_move`], which commits a fully validated move and hands
/// the turn to the other side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    side_to_move: Color,
}

impl Position {
    /// Creates a position from a board and the side to move.
    pub fn new(board: Board, side_to_move: Color) -> Self {
        Position {
            board,
            side_to_move,
        }
    }

    /// Creates the standard starting position, White to move.
    pub fn startpos() -> Self {
        Self::new(Board::starting(), Color::White)
    }

    /// Creates a position from a FEN string.
    ///
    /// Castling, en passant and clock fields are ignored.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = Fen::parse(fen)?;
        Ok(Self::new(Board::from_cells(parsed.cells), parsed.side_to_move))
    }

    /// Converts the position to a FEN string.
    pub fn to_fen(&self) -> String {
        Fen {
            cells: *self.board.cells(),
            side_to_move: self.side_to_move,
        }
        .to_fen()
    }

    /// Returns the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Validates and plays a move for the side to move, then passes the turn.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// bounds, null move, empty source, turn, piece geometry, king safety.
    /// On any error the position is left unchanged.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<(), MoveError> {
        for sq in [from, to] {
            if !sq.is_on_board() {
                return Err(MoveError::OutOfBounds(sq));
            }
        }
        if from == to {
            return Err(MoveError::NullMove);
        }
        let mover = self
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptySource(from))?;
        if mover.color != self.side_to_move {
            return Err(MoveError::WrongTurn(mover.color));
        }
        if !validate_geometry(&self.board, from, to) {
            return Err(MoveError::IllegalGeometry { from, to });
        }
        if leaves_mover_in_check(&mut self.board, from, to)? {
            return Err(MoveError::ExposesKing { from, to });
        }

        self.board.remove(from);
        self.board.put(to, mover);
        self.side_to_move = self.side_to_move.opposite();
        Ok(())
    }

    /// Plays a [`Move`]; see [`Position::apply_move`].
    pub fn apply(&mut self, m: Move) -> Result<(), MoveError> {
        self.apply_move(m.from, m.to)
    }

    /// Parses `e2-e4` notation and plays the move.
    pub fn apply_notation(&mut self, notation: &str) -> Result<Move, MoveError> {
        let m = Move::from_notation(notation)?;
        self.apply(m)?;
        Ok(m)
    }

    /// Returns true if the side to move has its king attacked.
    pub fn is_in_check(&self) -> Result<bool, BoardError> {
        let king = self.board.find_king(self.side_to_move)?;
        Ok(square_attacked_by(
            &self.board,
            king,
            self.side_to_move.opposite(),
        ))
    }

    /// Returns every legal move for the side to move.
    pub fn legal_moves(&self) -> Result<LegalMoves, BoardError> {
        generate_legal_moves(self)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}
