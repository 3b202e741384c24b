use std::fmt;

use log::{debug, warn};

use crate::error::Result;
use crate::piece::{Color, Piece};
use crate::square::Square;

pub const BOARD_SIZE: usize = 8;

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Full board state. A plain value: copying it is how the rules explore
/// a hypothetical move without touching the game in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    grid: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    turn: Color,
    selected: Option<Square>,
    flipped: bool,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    pub fn new() -> Self {
        Self {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            turn: Color::White,
            selected: None,
            flipped: false,
        }
    }

    pub fn from_fen(fen: &str) -> Self {
        let mut position = Self::new();
        position.load(fen);
        position
    }

    pub fn starting() -> Self {
        Self::from_fen(STARTING_FEN)
    }

    /// Populates the grid from a slash-separated, rank-major board
    /// description such as [`STARTING_FEN`].
    ///
    /// Digits insert runs of empty squares, `/` moves to the start of the
    /// next rank and piece letters (`PNBRQK` White, `pnbrqk` Black) place a
    /// piece. Nothing is validated: rows may be short or long and ranks
    /// not mentioned keep their previous contents. An unrecognized
    /// character leaves its square alone but still takes up one file.
    /// Squares that fall off the board are dropped.
    pub fn load(&mut self, fen: &str) {
        let mut rank: i8 = 0;
        let mut file: i8 = 0;

        for ch in fen.chars() {
            if ch == '/' {
                rank = rank.saturating_add(1);
                file = 0;
                continue;
            }

            if let Some(run) = ch.to_digit(10) {
                for _ in 0..run {
                    self.place(Square::new(rank, file), None);
                    file = file.saturating_add(1);
                }
                continue;
            }

            match Piece::from_char(ch) {
                Some(piece) => self.place(Square::new(rank, file), Some(piece)),
                None => warn!(
                    "skipping unrecognized character {:?} at {}",
                    ch,
                    Square::new(rank, file)
                ),
            }
            file = file.saturating_add(1);
        }

        debug!("loaded board {:?}", fen);
    }

    fn place(&mut self, square: Square, piece: Option<Piece>) {
        if !square.is_on_board() {
            warn!("board description runs off the board at {}", square);
            return;
        }
        let (rank, file) = square.index();
        self.grid[rank][file] = piece;
    }

    // Off-board squares panic; callers filter with is_on_board first
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        assert!(square.is_on_board(), "piece_at called with off-board square {square}");
        let (rank, file) = square.index();
        self.grid[rank][file]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    // Unconditional relocation, no legality checks
    pub fn move_piece(&mut self, from: Square, to: Square) {
        let piece = self.piece_at(from);
        let (from_rank, from_file) = from.index();
        assert!(to.is_on_board(), "move_piece called with off-board square {to}");
        let (to_rank, to_file) = to.index();

        self.grid[from_rank][from_file] = None;
        self.grid[to_rank][to_file] = piece;
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn change_turn(&mut self) {
        self.turn = self.turn.opposite();
    }

    /// Reverses the rank order and toggles the orientation flag. Pawn
    /// direction reads the flag, so this affects legality too.
    pub fn flip(&mut self) {
        self.grid.reverse();
        self.flipped = !self.flipped;
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    pub fn set_selection(&mut self, square: Square) {
        self.selected = Some(square);
    }

    pub fn reset_selection(&mut self) {
        self.selected = None;
    }

    pub fn square_from_algebraic(&self, notation: &str) -> Result<Square> {
        Square::from_algebraic(notation, self.flipped)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.grid.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell {
                    Some(piece) => write!(f, "{piece}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}
