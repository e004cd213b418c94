//! The simulate-then-verify legality filter shared by every piece rule.

use crate::check::is_in_check;
use crate::{Board, BoardError};
use chess_core::{Piece, Square};
use tracing::trace;

/// Returns true if moving `piece` to `to` does not leave its own king in
/// check.
///
/// The move is played on a clone; `captured` names a pawn taken en passant,
/// which sits off the destination square and has to be removed separately.
pub fn is_legal(
    board: &Board,
    piece: &Piece,
    to: Square,
    captured: Option<Square>,
) -> Result<bool, BoardError> {
    let simulated = board.simulate(piece, to, captured);
    Ok(!is_in_check(&simulated, piece.color)?)
}

/// Keeps the candidates that pass [`is_legal`], preserving their order.
pub fn retain_legal(
    board: &Board,
    piece: &Piece,
    candidates: Vec<Square>,
) -> Result<Vec<Square>, BoardError> {
    let mut legal = Vec::with_capacity(candidates.len());
    for to in candidates {
        push_if_legal(board, piece, to, None, &mut legal)?;
    }
    Ok(legal)
}

/// Appends `to` to `legal` if the move passes [`is_legal`].
pub(crate) fn push_if_legal(
    board: &Board,
    piece: &Piece,
    to: Square,
    captured: Option<Square>,
    legal: &mut Vec<Square>,
) -> Result<(), BoardError> {
    if is_legal(board, piece, to, captured)? {
        legal.push(to);
    } else {
        trace!(from = %piece.square, %to, "candidate leaves king in check");
    }
    Ok(())
}
