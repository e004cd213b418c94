//! King and knight moves: single steps from a fixed offset table.

use super::legality::retain_legal;
use crate::geometry::{target_is_not_ally, KING_STEPS, KNIGHT_JUMPS};
use crate::{Board, BoardError};
use chess_core::{Piece, Square};

/// Legal king moves (no castling).
pub(crate) fn king_moves(board: &Board, piece: &Piece) -> Result<Vec<Square>, BoardError> {
    retain_legal(board, piece, step_targets(board, piece, &KING_STEPS))
}

/// Legal knight moves.
pub(crate) fn knight_moves(board: &Board, piece: &Piece) -> Result<Vec<Square>, BoardError> {
    retain_legal(board, piece, step_targets(board, piece, &KNIGHT_JUMPS))
}

fn step_targets(board: &Board, piece: &Piece, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(dx, dy)| piece.square.offset(dx, dy))
        .filter(|to| target_is_not_ally(board, to.row() as i8, to.col() as i8, piece.color))
        .collect()
}
