//! Per-piece movement geometry.
//!
//! Each rule answers whether `to` is reachable from `from` for that kind of
//! piece, using the position only for blocking and capture context. None of
//! them check that the squares are on the board or whether the mover's king
//! ends up attacked; [`crate::legality`] does both.

use chess_core::{Color, Position, Square};

use crate::path::{is_piece_in_diagonal_path, is_piece_in_straight_path};

/// (rank, file) jumps of a knight.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (-1, -2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// (rank, file) steps of a king. No castling.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Grid ranks pawns may double-push from, whatever their color.
const PAWN_START_RANKS: [i8; 2] = [1, 6];

/// Rank step of a forward pawn move: White walks towards rank 0 on an
/// unflipped board, Black towards rank 7.
pub fn pawn_direction(color: Color, flipped: bool) -> i8 {
    let direction = match color {
        Color::White => -1,
        Color::Black => 1,
    };
    if flipped {
        -direction
    } else {
        direction
    }
}

pub fn is_valid_pawn_square(position: &Position, from: Square, to: Square) -> bool {
    let pawn = match position.piece_at(from) {
        Some(piece) => piece,
        None => return false,
    };
    let direction = pawn_direction(pawn.color, position.is_flipped());

    let rank_diff = to.rank - from.rank;
    let file_diff = to.file - from.file;

    if file_diff == 0 {
        if rank_diff == direction {
            return position.is_empty(to);
        }

        if rank_diff == 2 * direction && PAWN_START_RANKS.contains(&from.rank) {
            let passed = from.offset(direction, 0);
            return position.is_empty(passed) && position.is_empty(to);
        }

        return false;
    }

    if file_diff.abs() == 1 && rank_diff == direction {
        return matches!(position.piece_at(to), Some(target) if target.color != pawn.color);
    }

    false
}

pub fn is_valid_knight_square(_position: &Position, from: Square, to: Square) -> bool {
    KNIGHT_OFFSETS
        .iter()
        .any(|&(d_rank, d_file)| from.offset(d_rank, d_file) == to)
}

pub fn is_valid_bishop_square(position: &Position, from: Square, to: Square) -> bool {
    let rank_diff = (to.rank - from.rank).abs();
    let file_diff = (to.file - from.file).abs();

    rank_diff != 0 && rank_diff == file_diff && !is_piece_in_diagonal_path(position, from, to)
}

pub fn is_valid_rook_square(position: &Position, from: Square, to: Square) -> bool {
    let same_rank = from.rank == to.rank;
    let same_file = from.file == to.file;

    same_rank != same_file && !is_piece_in_straight_path(position, from, to)
}

pub fn is_valid_queen_square(position: &Position, from: Square, to: Square) -> bool {
    is_valid_bishop_square(position, from, to) || is_valid_rook_square(position, from, to)
}

pub fn is_valid_king_square(_position: &Position, from: Square, to: Square) -> bool {
    KING_OFFSETS
        .iter()
        .any(|&(d_rank, d_file)| from.offset(d_rank, d_file) == to)
}
