//! Pawn moves: single and double steps, diagonal captures, en passant.
//!
//! Every candidate is checked on its own. Promotion happens when the move is
//! applied, so a pawn reaching the last row is an ordinary destination here.

use super::legality::push_if_legal;
use crate::geometry::{in_bounds, target_is_enemy};
use crate::{Board, BoardError};
use chess_core::{Color, Piece, PieceKind, Square};

/// Legal pawn moves in candidate order: forward, double, captures, en passant.
pub(crate) fn pawn_moves(board: &Board, piece: &Piece) -> Result<Vec<Square>, BoardError> {
    let dir = piece.color.pawn_direction();
    if dir == 0 {
        return Ok(Vec::new());
    }
    let (x, y) = (piece.square.row() as i8, piece.square.col() as i8);
    let mut moves = Vec::new();

    let forward = Square::from_coords(x + dir, y);
    if let Some(one) = forward.filter(|&sq| board.piece_at(sq).is_empty()) {
        push_if_legal(board, piece, one, None, &mut moves)?;
    }

    // The intermediate square must be empty too, whatever the single step's
    // own legality
    if !piece.has_moved {
        let intermediate = forward.is_some_and(|sq| board.piece_at(sq).is_empty());
        if let Some(two) = Square::from_coords(x + 2 * dir, y) {
            if intermediate && board.piece_at(two).is_empty() {
                push_if_legal(board, piece, two, None, &mut moves)?;
            }
        }
    }

    for dy in [-1, 1] {
        let (tx, ty) = (x + dir, y + dy);
        if !target_is_enemy(board, tx, ty, piece.color) {
            continue;
        }
        if let Some(to) = Square::from_coords(tx, ty) {
            push_if_legal(board, piece, to, None, &mut moves)?;
        }
    }

    if Some(piece.square.row()) == en_passant_row(piece.color) {
        for dy in [-1, 1] {
            if !in_bounds(x, y + dy) || !in_bounds(x + dir, y + dy) {
                continue;
            }
            let victim = Square::new(x as u8, (y + dy) as u8);
            let to = Square::new((x + dir) as u8, (y + dy) as u8);
            let target = board.piece_at(victim);
            let takeable = target.kind == PieceKind::Pawn
                && target.color == piece.color.opposite()
                && target.en_passant_eligible
                && board.piece_at(to).is_empty();
            if takeable {
                push_if_legal(board, piece, to, Some(victim), &mut moves)?;
            }
        }
    }

    Ok(moves)
}

/// The row a pawn of `color` must stand on to capture en passant: the row an
/// enemy pawn lands on after a double step.
fn en_passant_row(color: Color) -> Option<u8> {
    match color {
        Color::White => Some(3),
        Color::Black => Some(4),
        Color::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAWN_BOARD: &str = "4k3/3p1p2/4P3/pP5B/6pP/3b4/2P2P2/1K6";

    fn board(placement: &str) -> Board {
        Board::from_placement(placement).unwrap()
    }

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn squares(coords: &[(u8, u8)]) -> Vec<Square> {
        coords.iter().map(|&(r, c)| Square::new(r, c)).collect()
    }

    fn mark_eligible(b: &mut Board, name: &str) {
        let mut pawn = b.piece_at(sq(name));
        pawn.en_passant_eligible = true;
        b.place(pawn);
    }

    #[test]
    fn black_pawn_steps_and_captures() {
        let b = board(PAWN_BOARD);
        assert_eq!(
            b.valid_moves(sq("d7")).unwrap(),
            squares(&[(2, 3), (3, 3), (2, 4)])
        );
    }

    #[test]
    fn white_pawn_double_step() {
        let b = board(PAWN_BOARD);
        assert_eq!(b.valid_moves(sq("f2")).unwrap(), squares(&[(5, 5), (4, 5)]));
    }

    #[test]
    fn double_step_blocks_check_when_single_step_cannot() {
        let b = board("7k/8/8/8/K6r/8/4P3/8");
        assert_eq!(b.valid_moves(sq("e2")).unwrap(), vec![sq("e4")]);
    }

    #[test]
    fn pinned_pawn_cannot_move() {
        let b = board(PAWN_BOARD);
        assert!(b.valid_moves(sq("f7")).unwrap().is_empty());
    }

    #[test]
    fn pinned_pawn_may_capture_the_pinner() {
        let b = board(PAWN_BOARD);
        assert_eq!(b.valid_moves(sq("c2")).unwrap(), squares(&[(5, 3)]));
    }

    #[test]
    fn black_en_passant() {
        let mut b = board(PAWN_BOARD);
        b.set_ply(1);
        mark_eligible(&mut b, "h4");
        assert_eq!(b.valid_moves(sq("g4")).unwrap(), squares(&[(5, 6), (5, 7)]));
    }

    #[test]
    fn white_en_passant() {
        let mut b = board(PAWN_BOARD);
        mark_eligible(&mut b, "a5");
        assert_eq!(b.valid_moves(sq("b5")).unwrap(), squares(&[(2, 1), (2, 0)]));
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_not_offered() {
        let mut b = board("4k3/3p4/8/r3P2K/8/8/8/8");
        b.set_ply(1);
        b.attempt_notation("pd7d5").unwrap();
        assert!(b.piece_at(sq("d5")).en_passant_eligible);
        assert_eq!(b.valid_moves(sq("e5")).unwrap(), vec![sq("e6")]);
    }

    #[test]
    fn no_en_passant_without_flag() {
        let b = board(PAWN_BOARD);
        assert_eq!(b.valid_moves(sq("b5")).unwrap(), squares(&[(2, 1)]));
        assert_eq!(b.valid_moves(sq("g4")).unwrap(), squares(&[(5, 6)]));
    }

    #[test]
    fn pawn_captures_the_checker() {
        let b = board("4r3/8/8/8/8/5q2/3P2P1/3K4");
        assert_eq!(b.valid_moves(sq("g2")).unwrap(), squares(&[(5, 5)]));

        let b = board("3kr3/2p5/3Q4/8/8/8/8/8");
        assert_eq!(b.valid_moves(sq("c7")).unwrap(), squares(&[(2, 3)]));
    }

    #[test]
    fn blocked_pawn_has_no_forward_moves() {
        let b = board("4k3/8/8/8/8/4n3/4P3/4K3");
        assert!(b.valid_moves(sq("e2")).unwrap().is_empty());

        let b = board("4k3/8/8/8/4n3/8/4P3/4K3");
        assert_eq!(b.valid_moves(sq("e2")).unwrap(), vec![sq("e3")]);
    }

    #[test]
    fn moved_pawn_on_home_row_cannot_double_step() {
        let mut b = board("4k3/8/8/8/8/8/4P3/4K3");
        let mut pawn = b.piece_at(sq("e2"));
        pawn.has_moved = true;
        b.place(pawn);
        assert_eq!(b.valid_moves(sq("e2")).unwrap(), vec![sq("e3")]);
    }

    #[test]
    fn pawn_on_last_row_is_offered() {
        let b = board("4k3/P7/8/8/8/8/8/4K3");
        assert_eq!(b.valid_moves(sq("a7")).unwrap(), vec![sq("a8")]);
    }
}
