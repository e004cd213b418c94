//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.
//! Castling is never generated, so counts match the reference tables only
//! up to the first depth where castling becomes possible.

use super::all_legal_moves;
use crate::{Board, BoardError};

/// Counts the number of leaf nodes at the given depth, moving the side to
/// play at each level.
pub fn perft(board: &Board, depth: u32) -> Result<u64, BoardError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = all_legal_moves(board, board.turn_color())?;

    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for m in moves {
        let mut next = board.clone();
        next.apply(m);
        nodes += perft(&next, depth - 1)?;
    }
    Ok(nodes)
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(board: &Board, depth: u32) -> Result<Vec<(String, u64)>, BoardError> {
    let moves = all_legal_moves(board, board.turn_color())?;
    let mut results = Vec::with_capacity(moves.len());

    for m in moves {
        let mut next = board.clone();
        next.apply(m);
        let nodes = if depth > 1 {
            perft(&next, depth - 1)?
        } else {
            1
        };
        results.push((m.to_coordinate(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(results)
}
