//! End-to-end rule checks through the public API: whole games played with
//! `attempt_move`, plus properties over random playouts.

use chess_engine::{Board, Color, GameStatus, Move, MoveError, PieceKind, Square};
use proptest::prelude::*;

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

fn play(board: &mut Board, moves: &[&str]) {
    for text in moves {
        board
            .attempt_notation(text)
            .unwrap_or_else(|e| panic!("{} rejected: {}", text, e));
    }
}

#[test]
fn startpos_has_20_moves_per_side() {
    let board = Board::startpos();
    assert_eq!(board.all_legal_moves(Color::White).unwrap().len(), 20);
    assert_eq!(board.all_legal_moves(Color::Black).unwrap().len(), 20);
}

#[test]
fn double_check_allows_only_king_moves() {
    let board = Board::from_placement("3r4/8/8/8/q7/5N2/R7/3K4").unwrap();
    let moves = board.all_legal_moves(Color::White).unwrap();
    assert_eq!(moves.len(), 3);
    for m in moves {
        assert_eq!(board.piece_at(m.from()).kind, PieceKind::King);
    }
}

#[test]
fn pinned_rook_stays_on_the_pin_ray() {
    let board = Board::from_placement("4r3/8/8/8/4R3/8/8/4K3").unwrap();
    let moves = board.valid_moves(sq("e4")).unwrap();
    assert_eq!(
        moves,
        vec![sq("e3"), sq("e2"), sq("e5"), sq("e6"), sq("e7"), sq("e8")]
    );
}

#[test]
fn en_passant_is_offered_for_one_ply() {
    let mut board = Board::startpos();
    play(&mut board, &["Pe2e4", "pa7a6", "Pe4e5", "pd7d5"]);
    assert_eq!(
        board.valid_moves(sq("e5")).unwrap(),
        vec![sq("e6"), sq("d6")]
    );

    play(&mut board, &["Pa2a3", "pa6a5"]);
    assert_eq!(board.valid_moves(sq("e5")).unwrap(), vec![sq("e6")]);
}

#[test]
fn en_passant_capture_removes_the_passed_pawn() {
    let mut board = Board::startpos();
    play(&mut board, &["Pe2e4", "pa7a6", "Pe4e5", "pd7d5", "Pe5d6"]);
    assert!(board.piece_at(sq("d5")).is_empty());
    assert!(board.piece_at(sq("e5")).is_empty());
    let pawn = board.piece_at(sq("d6"));
    assert_eq!((pawn.kind, pawn.color), (PieceKind::Pawn, Color::White));
}

#[test]
fn promotion_always_gives_a_queen() {
    let mut board = Board::from_placement("4k3/1P6/8/8/8/8/8/4K3").unwrap();
    board.attempt_notation("Pb7b8").unwrap();
    let piece = board.piece_at(sq("b8"));
    assert_eq!((piece.kind, piece.color), (PieceKind::Queen, Color::White));
    assert!(board.is_in_check(Color::Black).unwrap());
}

#[test]
fn back_rank_mate() {
    let mut board = Board::from_placement("6k1/5ppp/8/8/8/8/8/R5K1").unwrap();
    assert_eq!(board.status().unwrap(), GameStatus::Ongoing);
    board.attempt_notation("Ra1a8").unwrap();
    assert!(board.is_checkmate(Color::Black).unwrap());
    assert_eq!(board.status().unwrap(), GameStatus::Checkmate(Color::Black));
}

#[test]
fn fools_mate() {
    let mut board = Board::startpos();
    play(&mut board, &["Pf2f3", "pe7e5", "Pg2g4", "qd8h4"]);
    assert_eq!(board.status().unwrap(), GameStatus::Checkmate(Color::White));
    assert!(board.all_legal_moves(Color::White).unwrap().is_empty());
}

#[test]
fn rejected_move_leaves_board_identical() {
    let mut board = Board::startpos();
    let before = board.clone();
    let err = board.attempt_move(Move::new(sq("e2"), sq("e5"))).unwrap_err();
    assert_eq!(err, MoveError::IllegalMove(Move::new(sq("e2"), sq("e5"))));
    assert_eq!(board, before);
}

proptest! {
    #[test]
    fn attempt_move_either_applies_or_changes_nothing(from in 0u8..64, to in 0u8..64) {
        let mut board = Board::startpos();
        let before = board.clone();
        let mv = Move::new(Square::from_index(from).unwrap(), Square::from_index(to).unwrap());
        let legal = board.valid_moves(mv.from()).unwrap().contains(&mv.to())
            && board.piece_at(mv.from()).color == Color::White;
        match board.attempt_move(mv) {
            Ok(()) => {
                prop_assert!(legal);
                prop_assert_eq!(board.ply(), 1);
            }
            Err(_) => {
                prop_assert!(!legal);
                prop_assert_eq!(board, before);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn random_playouts_keep_invariants(
        choices in prop::collection::vec(any::<prop::sample::Index>(), 0..60)
    ) {
        let mut board = Board::startpos();
        for choice in choices {
            // A king may be taken by the enemy king, which ends the playout
            let Ok(moves) = board.all_legal_moves(board.turn_color()) else {
                break;
            };
            if moves.is_empty() {
                break;
            }
            let mv = moves[choice.index(moves.len())];
            let ply = board.ply();
            let twice = board.valid_moves(mv.from()).unwrap();
            prop_assert_eq!(twice, board.valid_moves(mv.from()).unwrap());

            prop_assert_eq!(board.attempt_move(mv), Ok(()));
            prop_assert_eq!(board.ply(), ply + 1);

            for piece in board.pieces() {
                if piece.kind == PieceKind::Pawn {
                    prop_assert!(piece.square.row() != 0 && piece.square.row() != 7);
                }
                if piece.en_passant_eligible {
                    prop_assert_eq!(piece.square, mv.to());
                    prop_assert_eq!(piece.kind, PieceKind::Pawn);
                }
            }
        }
    }
}
