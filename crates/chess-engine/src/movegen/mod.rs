//! Move generation.
//!
//! Each piece kind has a rule function that lists geometric candidates and
//! runs every one through the legality filter. Rules are looked up in a
//! table indexed by [`PieceKind`]; `Empty` has no rule and never moves.
//!
//! Output order is deterministic: directions are scanned in fixed order and
//! pieces in row-major board order.

mod leapers;
mod legality;
mod pawn;
pub mod perft;
mod sliders;

use crate::{Board, BoardError};
use chess_core::{Color, Move, Piece, PieceKind, Square};

pub use legality::{is_legal, retain_legal};

/// A movement rule: the legal destinations of `piece` on `board`.
pub type MoveRule = fn(&Board, &Piece) -> Result<Vec<Square>, BoardError>;

/// Rules indexed by [`PieceKind::index`].
const RULES: [Option<MoveRule>; 7] = [
    None,
    Some(pawn::pawn_moves as MoveRule),
    Some(sliders::rook_moves as MoveRule),
    Some(sliders::bishop_moves as MoveRule),
    Some(sliders::queen_moves as MoveRule),
    Some(leapers::king_moves as MoveRule),
    Some(leapers::knight_moves as MoveRule),
];

/// Returns the movement rule for `kind`, or `None` for empty squares.
#[inline]
pub fn rule_for(kind: PieceKind) -> Option<MoveRule> {
    RULES[kind.index()]
}

/// Returns the legal destinations of the piece on `sq`.
///
/// Recomputed on every call; the board is only read.
pub fn valid_moves(board: &Board, sq: Square) -> Result<Vec<Square>, BoardError> {
    let piece = board.piece_at(sq);
    match rule_for(piece.kind) {
        Some(rule) => rule(board, &piece),
        None => Ok(Vec::new()),
    }
}

/// Returns every legal move of `color`, grouped by piece in board order.
pub fn all_legal_moves(board: &Board, color: Color) -> Result<Vec<Move>, BoardError> {
    let mut moves = Vec::new();
    for piece in board.pieces().filter(|p| !p.is_empty() && p.color == color) {
        for to in valid_moves(board, piece.square)? {
            moves.push(Move::new(piece.square, to));
        }
    }
    Ok(moves)
}
