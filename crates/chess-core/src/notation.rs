//! Five-character move notation: `{piece}{file}{rank}{file}{rank}`.
//!
//! The piece letter's case gives the mover's color (`Pe2e4` is a White pawn,
//! `nb8c6` a Black knight). There is no syntax for castling, promotion choice
//! or disambiguation.

use crate::{Color, Move, PieceKind, Square};
use thiserror::Error;

/// Errors that can occur when parsing move notation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid notation: expected 5 characters, got {0}")]
    InvalidLength(usize),

    #[error("invalid piece letter '{0}'")]
    InvalidPiece(char),

    #[error("invalid square '{0}'")]
    InvalidSquare(String),
}

/// A parsed move: which piece claims to move, from where, to where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notation {
    pub kind: PieceKind,
    pub color: Color,
    pub from: Square,
    pub to: Square,
}

impl Notation {
    /// Parses a notation string.
    pub fn parse(s: &str) -> Result<Self, NotationError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 5 {
            return Err(NotationError::InvalidLength(chars.len()));
        }

        let (kind, color) =
            PieceKind::from_char(chars[0]).ok_or(NotationError::InvalidPiece(chars[0]))?;
        let from = Self::parse_square(&chars[1..3])?;
        let to = Self::parse_square(&chars[3..5])?;

        Ok(Notation {
            kind,
            color,
            from,
            to,
        })
    }

    fn parse_square(chars: &[char]) -> Result<Square, NotationError> {
        let text: String = chars.iter().collect();
        Square::from_algebraic(&text).ok_or(NotationError::InvalidSquare(text))
    }

    /// Returns the origin/destination pair.
    #[inline]
    pub const fn to_move(&self) -> Move {
        Move::new(self.from, self.to)
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = self.kind.to_char(self.color).unwrap_or('?');
        write!(f, "{}{}{}", letter, self.from, self.to)
    }
}
