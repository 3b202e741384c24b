//! Ray walkers for the sliding pieces.
//!
//! Both walkers start on the square after `from` and stop just before `to`;
//! the destination itself is never inspected; capturing or refusing to
//! capture on it is decided by the legality entry point.

use chess_core::{Position, Square};

/// True if any square strictly between `from` and `to` on their shared
/// diagonal is occupied. Squares that are not on a common diagonal have
/// nothing between them.
pub fn is_piece_in_diagonal_path(position: &Position, from: Square, to: Square) -> bool {
    let d_rank = to.rank - from.rank;
    let d_file = to.file - from.file;

    if d_rank == 0 || d_rank.abs() != d_file.abs() {
        return false;
    }

    is_ray_blocked(position, from, to, d_rank.signum(), d_file.signum())
}

/// True if any square strictly between `from` and `to` on their shared
/// rank or file is occupied. Exactly one of the deltas must be zero,
/// anything else has nothing between.
pub fn is_piece_in_straight_path(position: &Position, from: Square, to: Square) -> bool {
    let d_rank = to.rank - from.rank;
    let d_file = to.file - from.file;

    if (d_rank == 0) == (d_file == 0) {
        return false;
    }

    is_ray_blocked(position, from, to, d_rank.signum(), d_file.signum())
}

fn is_ray_blocked(
    position: &Position,
    from: Square,
    to: Square,
    rank_step: i8,
    file_step: i8,
) -> bool {
    let mut current = from.offset(rank_step, file_step);

    while current != to && current.is_on_board() {
        if !position.is_empty(current) {
            return true;
        }
        current = current.offset(rank_step, file_step);
    }

    false
}
