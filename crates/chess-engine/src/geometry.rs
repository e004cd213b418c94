//! Bounds and occupancy tests shared by every movement rule.
//!
//! Coordinates are signed so callers can step off the board and ask.

use crate::Board;
use chess_core::{Color, Square};

/// The 8 unit steps around a square, in scan order.
pub const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The 8 knight jumps, in scan order.
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Returns true if both coordinates lie in 0-7.
#[inline]
pub const fn in_bounds(x: i8, y: i8) -> bool {
    x >= 0 && x < 8 && y >= 0 && y < 8
}

/// Returns true if `color` may land on `(x, y)`: the square is empty or
/// holds the other side. Off-board squares are never landable.
pub fn target_is_not_ally(board: &Board, x: i8, y: i8, color: Color) -> bool {
    match Square::from_coords(x, y) {
        Some(sq) => {
            let target = board.piece_at(sq);
            target.is_empty() || target.color != color
        }
        None => false,
    }
}

/// Returns true if `(x, y)` holds a real piece of a color other than `color`.
pub fn target_is_enemy(board: &Board, x: i8, y: i8, color: Color) -> bool {
    match Square::from_coords(x, y) {
        Some(sq) => {
            let target = board.piece_at(sq);
            !target.is_empty() && target.color != color
        }
        None => false,
    }
}
