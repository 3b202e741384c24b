use chess_core::{Color, Piece, PieceKind, Position, Square, STARTING_FEN};
use chess_rules::movement::{KING_OFFSETS, KNIGHT_OFFSETS};
use chess_rules::{
    is_in_check, is_in_checkmate, is_legal_square, is_square_on_board, is_valid_move,
    is_valid_square,
};
use proptest::prelude::*;

fn sq(rank: i8, file: i8) -> Square {
    Square::new(rank, file)
}

#[test]
fn starting_arrangement_loads() {
    let position = Position::from_fen(STARTING_FEN);

    assert_eq!(
        position.piece_at(sq(0, 0)),
        Some(Piece::new(PieceKind::Rook, Color::Black))
    );
    assert_eq!(
        position.piece_at(sq(7, 4)),
        Some(Piece::new(PieceKind::King, Color::White))
    );
    for rank in 2..=5 {
        for file in 0..8 {
            assert_eq!(position.piece_at(sq(rank, file)), None, "({rank},{file})");
        }
    }
}

#[test]
fn pawn_pushes_from_the_start() {
    let position = Position::starting();

    assert_eq!(is_valid_move(&position, sq(6, 4), sq(4, 4)), Ok(true));
    assert_eq!(is_valid_move(&position, sq(6, 4), sq(3, 4)), Ok(false));
    assert_eq!(is_valid_move(&position, sq(1, 4), sq(1, 4)), Ok(false));
}

#[test]
fn played_moves_change_what_is_legal() {
    let mut position = Position::starting();
    position.move_piece(sq(6, 4), sq(4, 4));
    position.change_turn();

    // The bishop on f1 now has the diagonal the pawn vacated.
    assert_eq!(is_valid_move(&position, sq(7, 5), sq(4, 2)), Ok(true));
    assert_eq!(is_valid_move(&position, sq(7, 3), sq(3, 7)), Ok(true));
    assert_eq!(is_valid_move(&position, sq(4, 4), sq(2, 4)), Ok(false));
}

#[test]
fn king_may_not_stay_on_an_open_file() {
    let position = Position::from_fen("4r3/8/8/8/8/N7/8/4K3");
    let king = sq(7, 4);

    assert_eq!(is_in_check(&position, Color::White), Ok(true));
    assert_eq!(is_valid_move(&position, king, sq(7, 3)), Ok(true));
    assert_eq!(is_valid_move(&position, king, sq(7, 5)), Ok(true));
    assert_eq!(is_legal_square(&position, king, sq(6, 4)), Ok(false));
    assert_eq!(is_valid_move(&position, king, sq(6, 4)), Ok(false));

    // The knight cannot reach file 4, so none of its jumps resolve the check.
    for to in [sq(3, 1), sq(4, 2), sq(6, 2), sq(7, 1)] {
        assert!(is_valid_square(&position, sq(5, 0), to));
        assert_eq!(is_legal_square(&position, sq(5, 0), to), Ok(false));
    }
}

#[test]
fn queen_and_king_mate_the_cornered_king() {
    let position = Position::from_fen("k7/1Q6/2K5/8/8/8/8/8");
    assert_eq!(is_in_check(&position, Color::Black), Ok(true));
    assert_eq!(is_in_checkmate(&position, Color::Black), Ok(true));

    let without_queen = Position::from_fen("k7/8/2K5/8/8/8/8/8");
    assert_eq!(is_in_check(&without_queen, Color::Black), Ok(false));
    assert_eq!(is_in_checkmate(&without_queen, Color::Black), Ok(false));
}

#[test]
fn unprotected_queen_can_be_taken() {
    let position = Position::from_fen("k7/1Q6/8/8/8/8/8/7K");
    assert_eq!(is_in_check(&position, Color::Black), Ok(true));
    assert_eq!(is_valid_move(&position, sq(0, 0), sq(1, 1)), Ok(true));
    assert_eq!(is_in_checkmate(&position, Color::Black), Ok(false));
}

#[test]
fn flipped_board_mate_is_still_mate() {
    let mut position = Position::from_fen("R6k/6pp/8/8/8/8/8/7K");
    position.flip();
    assert_eq!(is_in_checkmate(&position, Color::Black), Ok(true));
}

#[test]
fn knight_offsets_are_exact() {
    let position = Position::from_fen("8/8/8/3N4");
    let from = sq(3, 3);

    for to in Square::all() {
        let expected = KNIGHT_OFFSETS
            .iter()
            .any(|&(d_rank, d_file)| from.offset(d_rank, d_file) == to);
        assert_eq!(is_valid_square(&position, from, to), expected, "knight to {to}");
    }
    assert_eq!(Square::all().filter(|&to| is_valid_square(&position, from, to)).count(), 8);
}

#[test]
fn king_offsets_are_exact() {
    let position = Position::from_fen("8/8/8/3K4");
    let from = sq(3, 3);

    for to in Square::all() {
        let expected = (to.rank - from.rank).abs() <= 1
            && (to.file - from.file).abs() <= 1
            && to != from;
        assert_eq!(is_valid_square(&position, from, to), expected, "king to {to}");
    }
    assert_eq!(KING_OFFSETS.len(), 8);
}

const BOARD_LETTERS: &[char] = &[
    '.', '.', '.', '.', '.', '.', 'p', 'n', 'b', 'r', 'q', 'k', 'P', 'N', 'B', 'R', 'Q', 'K',
];

fn board_description() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(BOARD_LETTERS), 64).prop_map(|cells| {
        cells
            .chunks(8)
            .map(|row| {
                row.iter()
                    .map(|&cell| if cell == '.' { '1' } else { cell })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    })
}

proptest! {
    #[test]
    fn on_board_matches_bounds(rank in -20i8..20, file in -20i8..20) {
        let square = sq(rank, file);
        prop_assert_eq!(
            is_square_on_board(square),
            (0..8).contains(&rank) && (0..8).contains(&file)
        );
    }

    #[test]
    fn zero_delta_is_never_valid(fen in board_description(), rank in 0i8..8, file in 0i8..8) {
        let position = Position::from_fen(&fen);
        let square = sq(rank, file);
        prop_assert!(!is_valid_square(&position, square, square));
    }

    #[test]
    fn no_piece_rule_accepts_a_null_move(kind_index in 0usize..6, rank in 0i8..8, file in 0i8..8) {
        let kind = PieceKind::ALL[kind_index];
        let square = sq(rank, file);
        let mut position = Position::new();
        position.load(&format!("{}", Piece::white(kind)));
        position.move_piece(sq(0, 0), square);
        prop_assert!(!is_valid_square(&position, square, square));
    }

    #[test]
    fn flipping_twice_is_identity(fen in board_description()) {
        let original = Position::from_fen(&fen);
        let mut position = original;
        position.flip();
        position.flip();
        prop_assert_eq!(position, original);
        prop_assert!(!position.is_flipped());
    }
}
