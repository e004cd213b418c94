//! Player color representation.

/// The owner of a piece.
///
/// `None` marks the occupant of an empty square and never moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
    #[default]
    None = 2,
}

impl Color {
    /// Returns the opposite color. `None` stays `None`.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            Color::None => Color::None,
        }
    }

    /// Returns the side to move after `ply` half-moves (White on even plies).
    #[inline]
    pub const fn for_ply(ply: u32) -> Self {
        if ply % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Returns the row step a pawn of this color advances by.
    ///
    /// White starts near row 6 and moves toward row 0.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
            Color::None => 0,
        }
    }

    /// Returns the row this color's pawns start on.
    #[inline]
    pub const fn pawn_home_row(self) -> Option<u8> {
        match self {
            Color::White => Some(6),
            Color::Black => Some(1),
            Color::None => None,
        }
    }

    /// Returns the row on which this color's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> Option<u8> {
        match self {
            Color::White => Some(0),
            Color::Black => Some(7),
            Color::None => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
            Color::None => write!(f, "None"),
        }
    }
}
