use thiserror::Error;

use crate::piece::Color;

/// Failures surfaced by the board model and the rules built on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("no {color} king on the board")]
    MissingKing { color: Color },

    #[error("invalid square: {0}")]
    InvalidSquare(String),
}

pub type Result<T> = std::result::Result<T, ChessError>;
