// Move legality and check detection over a chess_core::Position
pub mod check;
pub mod legality;
pub mod movement;
pub mod path;

pub use check::{checkers, is_in_check, is_in_checkmate, king_square};
pub use legality::{
    is_legal_square, is_square_on_board, is_valid_move, is_valid_square, legal_destinations,
};
