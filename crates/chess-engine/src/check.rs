//! King location, check detection and checkmate.
//!
//! Check is found by looking outward from the king: rays for sliders, the
//! eight knight jumps, and the two pawn-attack squares.

use crate::geometry::{in_bounds, target_is_enemy, KING_STEPS, KNIGHT_JUMPS};
use crate::movegen::all_legal_moves;
use crate::{Board, BoardError};
use chess_core::{Color, PieceKind, Square};

/// Returns the square of the first king of `color` in row-major order.
///
/// A board with two kings of one color is not detected.
pub fn find_king(board: &Board, color: Color) -> Result<Square, BoardError> {
    board
        .pieces()
        .find(|p| p.kind == PieceKind::King && p.color == color)
        .map(|p| p.square)
        .ok_or(BoardError::KingNotFound(color))
}

/// Returns true if the king of `color` is attacked.
pub fn is_in_check(board: &Board, color: Color) -> Result<bool, BoardError> {
    let king = find_king(board, color)?;
    let (kx, ky) = (king.row() as i8, king.col() as i8);

    // Sliding attacks
    for &(dx, dy) in &KING_STEPS {
        let (mut x, mut y) = (kx + dx, ky + dy);
        while in_bounds(x, y) {
            let occupant = board.piece_at(Square::new(x as u8, y as u8));
            if occupant.is_empty() {
                x += dx;
                y += dy;
                continue;
            }
            if occupant.color == color {
                break;
            }
            let diagonal = dx.abs() == dy.abs();
            let attacks = if diagonal {
                matches!(occupant.kind, PieceKind::Bishop | PieceKind::Queen)
            } else {
                matches!(occupant.kind, PieceKind::Rook | PieceKind::Queen)
            };
            if attacks {
                return Ok(true);
            }
            break;
        }
    }

    // Knight attacks
    for &(dx, dy) in &KNIGHT_JUMPS {
        if enemy_of_kind(board, kx + dx, ky + dy, color, PieceKind::Knight) {
            return Ok(true);
        }
    }

    // Pawn attacks come from the two squares diagonally ahead of the king
    let ahead = kx + color.pawn_direction();
    for dy in [-1, 1] {
        if enemy_of_kind(board, ahead, ky + dy, color, PieceKind::Pawn) {
            return Ok(true);
        }
    }

    Ok(false)
}

fn enemy_of_kind(board: &Board, x: i8, y: i8, color: Color, kind: PieceKind) -> bool {
    target_is_enemy(board, x, y, color)
        && Square::from_coords(x, y).is_some_and(|sq| board.piece_at(sq).kind == kind)
}

/// Returns true if `color` is in check and has no legal move.
pub fn is_checkmate(board: &Board, color: Color) -> Result<bool, BoardError> {
    if !is_in_check(board, color)? {
        return Ok(false);
    }
    Ok(all_legal_moves(board, color)?.is_empty())
}
