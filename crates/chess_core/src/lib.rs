// Core board model: pieces, squares and the mutable position
pub mod error;
pub mod piece;
pub mod position;
pub mod square;

// Re-export main types for convenience
pub use error::{ChessError, Result};
pub use piece::{Color, Piece, PieceKind};
pub use position::{Position, BOARD_SIZE, STARTING_FEN};
pub use square::Square;
