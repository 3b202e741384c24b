use std::fmt;

use crate::error::{ChessError, Result};

/// Grid coordinate. Rank 0 is the first row of the loader string and
/// grows downwards; file 0 is the leftmost column.
///
/// Signed so that off-board coordinates stay representable; rule queries
/// reject them instead of indexing with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub rank: i8, // 0-7 on board
    pub file: i8, // 0-7 on board
}

impl Square {
    pub const fn new(rank: i8, file: i8) -> Self {
        Self { rank, file }
    }

    pub const fn is_on_board(self) -> bool {
        self.rank >= 0 && self.rank < 8 && self.file >= 0 && self.file < 8
    }

    pub const fn offset(self, d_rank: i8, d_file: i8) -> Self {
        Self::new(self.rank + d_rank, self.file + d_file)
    }

    /// All 64 squares, rank-major.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|rank| (0..8).map(move |file| Square::new(rank, file)))
    }

    /// Parses `a1`..`h8`. When `flipped` is false rank 8 is grid rank 0,
    /// otherwise rank 1 is.
    pub fn from_algebraic(notation: &str, flipped: bool) -> Result<Self> {
        let invalid = || ChessError::InvalidSquare(notation.to_string());

        let mut chars = notation.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(invalid()),
        };

        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(invalid());
        }

        let file = (file as u8 - b'a') as i8;
        let rank_number = (rank as u8 - b'1') as i8;
        let rank = if flipped { rank_number } else { 7 - rank_number };

        Ok(Self::new(rank, file))
    }

    pub fn to_algebraic(self, flipped: bool) -> Option<String> {
        if !self.is_on_board() {
            return None;
        }
        let rank_number = if flipped { self.rank } else { 7 - self.rank };
        Some(format!(
            "{}{}",
            (b'a' + self.file as u8) as char,
            (b'1' + rank_number as u8) as char
        ))
    }

    pub(crate) fn index(self) -> (usize, usize) {
        (self.rank as usize, self.file as usize)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.rank, self.file)
    }
}
