//! Move representation and the `e2-e4` move notation.

use crate::Square;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing move notation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("move {0:?} does not match the format <file><rank>-<file><rank>, e.g. e2-e4")]
    Malformed(String),
}

/// A move from one square to another.
///
/// Castling, en passant and promotion do not exist here, so a move is
/// fully described by its two squares.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Parses a move of the exact form `<file><rank>-<file><rank>`.
    ///
    /// Files are `a`-`h` and ranks `1`-`8`. Anything else, including
    /// surrounding whitespace or trailing characters, is rejected.
    pub fn from_notation(s: &str) -> Result<Self, NotationError> {
        let malformed = || NotationError::Malformed(s.to_string());
        let (from, to) = s.split_once('-').ok_or_else(malformed)?;
        let from = Square::from_algebraic(from).ok_or_else(malformed)?;
        let to = Square::from_algebraic(to).ok_or_else(malformed)?;
        Ok(Move { from, to })
    }

    /// Returns the notation for this move (e.g., "e2-e4").
    pub fn to_notation(self) -> String {
        format!("{}-{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_notation(s)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_notation() {
        let m = Move::from_notation("e2-a5").unwrap();
        assert_eq!(m.from, Square::from_coords(4, 1));
        assert_eq!(m.to, Square::from_coords(0, 4));
    }

    #[test]
    fn rejects_malformed() {
        for s in ["e2-i5", "e9-e5", "xyz", "ab-cd", "##e2-e5##", "", "e2e4", "e2-e4 ", " e2-e4", "e2--e4", "E2-E4", "e2-e4-e5"] {
            assert_eq!(
                Move::from_notation(s),
                Err(NotationError::Malformed(s.to_string())),
                "{:?} should be rejected",
                s
            );
        }
    }

    #[test]
    fn multibyte_input_is_malformed() {
        assert!(Move::from_notation("é2-e4").is_err());
        assert!(Move::from_notation("e2–e4").is_err());
    }

    #[test]
    fn display_and_debug() {
        let m: Move = "g1-f3".parse().unwrap();
        assert_eq!(m.to_string(), "g1-f3");
        assert_eq!(format!("{:?}", m), "Move(g1-f3)");
    }

    proptest! {
        #[test]
        fn notation_roundtrip(f1 in 0i8..8, r1 in 0i8..8, f2 in 0i8..8, r2 in 0i8..8) {
            let m = Move::new(Square::from_coords(f1, r1), Square::from_coords(f2, r2));
            prop_assert_eq!(Move::from_notation(&m.to_notation()), Ok(m));
        }

        #[test]
        fn arbitrary_strings_never_panic(s in "\\PC{0,8}") {
            let _ = Move::from_notation(&s);
        }
    }
}
