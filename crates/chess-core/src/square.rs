//! Board square representation.

use std::fmt;

/// A file (column) on the chess board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// Creates a file from a lowercase character ('a'-'h').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(File::A),
            'b' => Some(File::B),
            'c' => Some(File::C),
            'd' => Some(File::D),
            'e' => Some(File::E),
            'f' => Some(File::F),
            'g' => Some(File::G),
            'h' => Some(File::H),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> i8 {
        self as i8
    }
}

/// A rank (row) on the chess board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// Creates a rank from a character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Rank::R1),
            '2' => Some(Rank::R2),
            '3' => Some(Rank::R3),
            '4' => Some(Rank::R4),
            '5' => Some(Rank::R5),
            '6' => Some(Rank::R6),
            '7' => Some(Rank::R7),
            '8' => Some(Rank::R8),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> i8 {
        self as i8
    }
}

/// A square as a zero-based (file, rank) pair.
///
/// Coordinates are stored signed so that ray walks and externally supplied
/// coordinates can step off the board; [`Square::is_on_board`] tells the
/// two apart. Every square handed to a board lookup must be on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: i8,
    rank: i8,
}

impl Square {
    /// Creates a square from a file and a rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square {
            file: file.index(),
            rank: rank.index(),
        }
    }

    /// Creates a square from raw coordinates without bounds checking.
    #[inline]
    pub const fn from_coords(file: i8, rank: i8) -> Self {
        Square { file, rank }
    }

    /// Creates a square from a board index (rank * 8 + file, 0-63).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Square {
                file: (index % 8) as i8,
                rank: (index / 8) as i8,
            })
        } else {
            None
        }
    }

    /// Iterates over all 64 squares, a1 through h8, rank by rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = match File::from_char(bytes[0] as char) {
            Some(f) => f,
            None => return None,
        };
        let rank = match Rank::from_char(bytes[1] as char) {
            Some(r) => r,
            None => return None,
        };
        Some(Square::new(file, rank))
    }

    /// Returns the file coordinate (0 = a-file).
    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    /// Returns the rank coordinate (0 = first rank).
    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    /// Returns true if both coordinates lie in 0..=7.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        0 <= self.file && self.file <= 7 && 0 <= self.rank && self.rank <= 7
    }

    /// Returns the board index (rank * 8 + file).
    ///
    /// # Panics
    ///
    /// Panics if the square is off the board.
    #[inline]
    pub fn index(self) -> usize {
        assert!(self.is_on_board(), "square {:?} is off the board", self);
        (self.rank as usize) * 8 + self.file as usize
    }

    /// Returns the square `(df, dr)` away, or `None` if that leaves the board.
    #[inline]
    pub const fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let sq = Square {
            file: self.file + df,
            rank: self.rank + dr,
        };
        if sq.is_on_board() {
            Some(sq)
        } else {
            None
        }
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        if self.is_on_board() {
            let file = (b'a' + self.file as u8) as char;
            let rank = (b'1' + self.rank as u8) as char;
            format!("{}{}", file, rank)
        } else {
            format!("({},{})", self.file, self.rank)
        }
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
