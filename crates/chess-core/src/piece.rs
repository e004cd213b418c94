//! Chess piece representation.

use crate::{Color, Square};

/// The kinds of occupant a square can hold.
///
/// `Empty` fills every square without a real piece, so a board never has holes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PieceKind {
    #[default]
    Empty = 0,
    Pawn = 1,
    Rook = 2,
    Bishop = 3,
    Queen = 4,
    King = 5,
    Knight = 6,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Empty,
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Knight,
    ];

    /// Returns the index of this kind (0-6).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the letter for this kind with the given color, if it is a real piece.
    pub const fn to_char(self, color: Color) -> Option<char> {
        let c = match self {
            PieceKind::Empty => return None,
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
            PieceKind::Knight => 'n',
        };
        match color {
            Color::White => Some(c.to_ascii_uppercase()),
            _ => Some(c),
        }
    }

    /// Parses a piece letter into a kind and color (uppercase is White).
    pub const fn from_char(c: char) -> Option<(PieceKind, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            'n' => PieceKind::Knight,
            _ => return None,
        };
        Some((kind, color))
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Empty => "Empty",
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
            PieceKind::Knight => "Knight",
        };
        write!(f, "{}", name)
    }
}

/// The occupant of one square, together with its move-history flags.
///
/// `has_moved` and `en_passant_eligible` cannot be recovered from the
/// arrangement of pieces alone, so they travel with the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub square: Square,
    pub color: Color,
    pub kind: PieceKind,
    pub has_moved: bool,
    pub en_passant_eligible: bool,
}

impl Piece {
    /// Creates a piece that has not moved yet.
    #[inline]
    pub const fn new(square: Square, kind: PieceKind, color: Color) -> Self {
        Piece {
            square,
            color,
            kind,
            has_moved: false,
            en_passant_eligible: false,
        }
    }

    /// Creates the empty occupant of `square`.
    #[inline]
    pub const fn empty(square: Square) -> Self {
        Self::new(square, PieceKind::Empty, Color::None)
    }

    /// Returns true if this is the occupant of an empty square.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self.kind, PieceKind::Empty)
    }

    /// Returns the piece letter, or `None` for an empty square.
    #[inline]
    pub const fn to_char(&self) -> Option<char> {
        self.kind.to_char(self.color)
    }
}
