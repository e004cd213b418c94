//! Rook, bishop and queen moves: rays that stop at the first occupied square.

use super::legality::retain_legal;
use crate::geometry::{in_bounds, target_is_enemy, target_is_not_ally, KING_STEPS};
use crate::{Board, BoardError};
use chess_core::{Piece, Square};

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

/// Legal rook moves.
pub(crate) fn rook_moves(board: &Board, piece: &Piece) -> Result<Vec<Square>, BoardError> {
    retain_legal(board, piece, ray_targets(board, piece, &ROOK_DIRECTIONS))
}

/// Legal bishop moves.
pub(crate) fn bishop_moves(board: &Board, piece: &Piece) -> Result<Vec<Square>, BoardError> {
    retain_legal(board, piece, ray_targets(board, piece, &BISHOP_DIRECTIONS))
}

/// Legal queen moves: every direction a king can step in.
pub(crate) fn queen_moves(board: &Board, piece: &Piece) -> Result<Vec<Square>, BoardError> {
    retain_legal(board, piece, ray_targets(board, piece, &KING_STEPS))
}

/// Walks each direction until the edge or an ally, keeping the first enemy.
fn ray_targets(board: &Board, piece: &Piece, directions: &[(i8, i8)]) -> Vec<Square> {
    let (x0, y0) = (piece.square.row() as i8, piece.square.col() as i8);
    let mut targets = Vec::new();

    for &(dx, dy) in directions {
        let (mut x, mut y) = (x0 + dx, y0 + dy);
        while in_bounds(x, y) && target_is_not_ally(board, x, y, piece.color) {
            targets.push(Square::new(x as u8, y as u8));
            if target_is_enemy(board, x, y, piece.color) {
                break;
            }
            x += dx;
            y += dy;
        }
    }

    targets
}
