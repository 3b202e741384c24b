use chess_core::{ChessError, Color, Piece, PieceKind, Position, Result, Square};
use log::debug;

use crate::legality::{is_legal_square, is_valid_square};

/// First king of `color` in rank-major order. With several kings of one
/// color the first one wins.
pub fn king_square(position: &Position, color: Color) -> Result<Square> {
    let king = Piece::new(PieceKind::King, color);
    position
        .pieces()
        .find(|&(_, piece)| piece == king)
        .map(|(square, _)| square)
        .ok_or(ChessError::MissingKing { color })
}

/// Squares of every enemy piece that structurally reaches `color`'s king.
pub fn checkers(position: &Position, color: Color) -> Result<Vec<Square>> {
    let king = king_square(position, color)?;
    Ok(position
        .pieces()
        .filter(|&(square, piece)| piece.color != color && is_valid_square(position, square, king))
        .map(|(square, _)| square)
        .collect())
}

/// Whether any enemy piece can reach `color`'s king.
///
/// Attackers are judged on structural reachability alone. A pinned attacker
/// still gives check, and going through full legality here would recurse
/// back into this function.
pub fn is_in_check(position: &Position, color: Color) -> Result<bool> {
    let king = king_square(position, color)?;
    Ok(position
        .pieces()
        .any(|(square, piece)| piece.color != color && is_valid_square(position, square, king)))
}

/// In check with no legal move of any own piece that resolves it.
pub fn is_in_checkmate(position: &Position, color: Color) -> Result<bool> {
    if !is_in_check(position, color)? {
        return Ok(false);
    }

    for (from, piece) in position.pieces() {
        if piece.color != color {
            continue;
        }

        for to in Square::all() {
            if is_valid_square(position, from, to) && is_legal_square(position, from, to)? {
                debug!("{} escapes check with {}-{}", color, from, to);
                return Ok(false);
            }
        }
    }

    Ok(true)
}
