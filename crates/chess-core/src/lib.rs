//! Core types for chess.
//!
//! This crate provides the fundamental types used across the workspace:
//! - [`PieceKind`], [`Piece`] and [`Color`] for board occupants
//! - [`Square`] for board coordinates
//! - [`Move`] for origin/destination records
//! - [`Placement`] parsing and encoding
//! - [`Notation`] parsing for five-character moves

mod color;
mod mov;
mod notation;
mod piece;
mod placement;
mod square;

pub use color::Color;
pub use mov::Move;
pub use notation::{Notation, NotationError};
pub use piece::{Piece, PieceKind};
pub use placement::{Placement, PlacementError};
pub use square::Square;
