//! Chess move-legality engine.
//!
//! This crate provides:
//! - [`Board`] - 64 squares of [`Piece`]s plus the ply counter, with move
//!   application and turn enforcement
//! - Per-piece move rules looked up by [`PieceKind`] through [`rule_for`]
//! - Check detection by scanning outward from the king ([`is_in_check`])
//! - Checkmate detection and [`GameStatus`]
//! - [`perft`] node counting for validating the generator
//!
//! # Architecture
//!
//! Every rule lists geometric candidates for one piece, then plays each
//! candidate on a clone of the board and drops it if its own king ends up
//! attacked. Pins, discovered checks and en passant all fall out of that one
//! filter; there is no attack map or incremental state.
//!
//! # Example
//!
//! ```
//! use chess_engine::{Board, GameStatus, Square};
//!
//! let mut board = Board::startpos();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! println!("Pawn on e2 can reach {:?}", board.valid_moves(e2).unwrap());
//!
//! board.attempt_notation("Pe2e4").unwrap();
//! board.attempt_notation("pe7e5").unwrap();
//! assert_eq!(board.status().unwrap(), GameStatus::Ongoing);
//! println!("Position after 1.e4 e5: {}", board.to_placement());
//! ```

mod board;
mod check;
mod geometry;
pub mod movegen;

pub use board::{Board, BoardError, GameStatus, MoveError};
pub use check::{find_king, is_checkmate, is_in_check};
pub use chess_core::{Color, Move, Piece, PieceKind, Square};
pub use movegen::perft::{perft, perft_divide};
pub use movegen::{all_legal_moves, rule_for, valid_moves, MoveRule};
