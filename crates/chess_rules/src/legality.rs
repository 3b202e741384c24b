use chess_core::{PieceKind, Position, Result, Square};
use log::{error, trace};

use crate::check::is_in_check;
use crate::movement::{
    is_valid_bishop_square, is_valid_king_square, is_valid_knight_square, is_valid_pawn_square,
    is_valid_queen_square, is_valid_rook_square,
};

pub fn is_square_on_board(square: Square) -> bool {
    square.is_on_board()
}

/// Structural reachability: `to` fits the movement pattern of the piece on
/// `from` and does not hold a piece of the same color. Ignores whether the
/// mover's own king would be left in check.
pub fn is_valid_square(position: &Position, from: Square, to: Square) -> bool {
    if !is_square_on_board(from) || !is_square_on_board(to) {
        return false;
    }

    let piece = match position.piece_at(from) {
        Some(piece) => piece,
        None => {
            error!("asked to move from empty square {}", from);
            return false;
        }
    };

    if let Some(target) = position.piece_at(to) {
        if target.color == piece.color {
            return false;
        }
    }

    match piece.kind {
        PieceKind::Pawn => is_valid_pawn_square(position, from, to),
        PieceKind::Knight => is_valid_knight_square(position, from, to),
        PieceKind::Bishop => is_valid_bishop_square(position, from, to),
        PieceKind::Rook => is_valid_rook_square(position, from, to),
        PieceKind::Queen => is_valid_queen_square(position, from, to),
        PieceKind::King => is_valid_king_square(position, from, to),
    }
}

/// Plays `from`-`to` on a scratch copy and reports whether the mover's
/// king is safe afterwards. Covers king moves onto attacked squares as
/// well as pieces that were shielding their king.
pub fn is_legal_square(position: &Position, from: Square, to: Square) -> Result<bool> {
    if !is_square_on_board(from) || !is_square_on_board(to) {
        return Ok(false);
    }

    let mut scratch = *position;
    scratch.move_piece(from, to);

    let mover = match scratch.piece_at(to) {
        Some(piece) => piece.color,
        None => return Ok(false),
    };

    let exposed = is_in_check(&scratch, mover)?;
    if exposed {
        trace!("{}-{} would leave the {} king in check", from, to, mover);
    }
    Ok(!exposed)
}

/// Full legality of a single move. The entry point for callers driving a
/// game.
pub fn is_valid_move(position: &Position, from: Square, to: Square) -> Result<bool> {
    if !is_valid_square(position, from, to) {
        return Ok(false);
    }
    is_legal_square(position, from, to)
}

/// Every square the piece on `from` may legally move to, rank-major.
/// Empty for an empty or off-board `from`.
pub fn legal_destinations(position: &Position, from: Square) -> Result<Vec<Square>> {
    if !is_square_on_board(from) || position.is_empty(from) {
        return Ok(Vec::new());
    }

    let mut destinations = Vec::new();
    for to in Square::all() {
        if is_valid_move(position, from, to)? {
            destinations.push(to);
        }
    }
    Ok(destinations)
}
