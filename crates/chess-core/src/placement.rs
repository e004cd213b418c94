//! Piece placement strings (the board field of FEN).
//!
//! Rows are separated by `/` and read from row 0 (rank 8) downward. A digit
//! skips that many empty squares and a letter from `prbqkn` places a piece,
//! uppercase for White. Squares a string never mentions stay empty, so
//! `"8/8/8/8/8/K7"` is a valid placement.

use crate::{Color, PieceKind, Square};
use thiserror::Error;

/// Errors that can occur when parsing placement strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid character '{ch}' in row {row}")]
    InvalidCharacter { ch: char, row: u8 },

    #[error("row {row} describes more than 8 squares")]
    RowOverflow { row: u8 },

    #[error("placement describes more than 8 rows")]
    TooManyRows,
}

/// A decoded placement: every real piece with its square, in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Placement {
    pub pieces: Vec<(Square, PieceKind, Color)>,
}

impl Placement {
    /// The standard starting position.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Parses a placement string.
    pub fn parse(placement: &str) -> Result<Self, PlacementError> {
        let mut pieces = Vec::new();
        let mut row = 0u8;
        let mut col = 0u8;

        for ch in placement.chars() {
            match ch {
                '/' => {
                    row += 1;
                    col = 0;
                    if row > 7 {
                        return Err(PlacementError::TooManyRows);
                    }
                }
                '1'..='8' => {
                    col += ch as u8 - b'0';
                    if col > 8 {
                        return Err(PlacementError::RowOverflow { row });
                    }
                }
                _ => {
                    let (kind, color) = PieceKind::from_char(ch)
                        .ok_or(PlacementError::InvalidCharacter { ch, row })?;
                    if col > 7 {
                        return Err(PlacementError::RowOverflow { row });
                    }
                    pieces.push((Square::new(row, col), kind, color));
                    col += 1;
                }
            }
        }

        Ok(Placement { pieces })
    }

    /// Encodes the pieces back into a placement string with all 8 rows.
    pub fn to_placement_string(&self) -> String {
        let mut grid = [[None; 8]; 8];
        for &(sq, kind, color) in &self.pieces {
            grid[sq.row() as usize][sq.col() as usize] = kind.to_char(color);
        }

        let mut out = String::new();
        for (row, cells) in grid.iter().enumerate() {
            let mut empty_run = 0;
            for cell in cells {
                match cell {
                    Some(c) => {
                        if empty_run > 0 {
                            out.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        out.push(*c);
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                out.push_str(&empty_run.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }
}
