//! Live board state and move application.

use crate::check::{is_checkmate, is_in_check};
use crate::movegen::{all_legal_moves, valid_moves};
use chess_core::{
    Color, Move, Notation, NotationError, Piece, PieceKind, Placement, PlacementError, Square,
};
use thiserror::Error;
use tracing::debug;

/// Errors raised when a board is not well formed enough to evaluate.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("{0} king not found")]
    KingNotFound(Color),
}

/// Reasons a move attempt is rejected. The board is never modified when one
/// of these is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error("no piece on {0}")]
    EmptyOrigin(Square),

    #[error("no {color} {kind} on {square}")]
    PieceMismatch {
        square: Square,
        kind: PieceKind,
        color: Color,
    },

    #[error("{expected} is expected to play, not {found}")]
    WrongTurn { expected: Color, found: Color },

    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Where the game stands for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The given color is checkmated.
    Checkmate(Color),
}

/// A full 64-square board plus the ply counter.
///
/// Every square always holds exactly one [`Piece`]; empty squares hold an
/// `Empty`-kind piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Piece; 64],
    ply: u32,
}

impl Board {
    /// Creates a board with every square empty and White to move.
    pub fn empty() -> Self {
        let mut squares = [Piece::empty(Square::new(0, 0)); 64];
        for sq in Square::all() {
            squares[sq.index() as usize] = Piece::empty(sq);
        }
        Board { squares, ply: 0 }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_placement(Placement::STARTPOS).expect("STARTPOS is valid")
    }

    /// Creates a board from a placement string, White to move.
    ///
    /// Pawns away from their home row are marked as having moved, so the
    /// double step is only offered from the home row.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let parsed = Placement::parse(placement)?;
        let mut board = Board::empty();
        for (sq, kind, color) in parsed.pieces {
            board.put(sq, kind, color);
            if kind == PieceKind::Pawn && color.pawn_home_row() != Some(sq.row()) {
                board.squares[sq.index() as usize].has_moved = true;
            }
        }
        Ok(board)
    }

    /// Encodes the piece arrangement as a placement string.
    pub fn to_placement(&self) -> String {
        let pieces = self
            .pieces()
            .filter(|p| !p.is_empty())
            .map(|p| (p.square, p.kind, p.color))
            .collect();
        Placement { pieces }.to_placement_string()
    }

    /// Returns the occupant of `sq`.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Piece {
        self.squares[sq.index() as usize]
    }

    /// Places a fresh piece on `sq`, replacing whatever was there.
    pub fn put(&mut self, sq: Square, kind: PieceKind, color: Color) {
        self.squares[sq.index() as usize] = match kind {
            PieceKind::Empty => Piece::empty(sq),
            _ => Piece::new(sq, kind, color),
        };
    }

    /// Replaces the occupant of `piece.square` with `piece`, flags included.
    pub fn place(&mut self, piece: Piece) {
        self.squares[piece.square.index() as usize] = piece;
    }

    /// Empties `sq`.
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.squares[sq.index() as usize] = Piece::empty(sq);
    }

    /// Iterates over all 64 occupants in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter()
    }

    /// Returns the number of half-moves applied so far.
    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Overrides the ply counter (and with it the side to move).
    pub fn set_ply(&mut self, ply: u32) {
        self.ply = ply;
    }

    /// Returns the side to move.
    #[inline]
    pub fn turn_color(&self) -> Color {
        Color::for_ply(self.ply)
    }

    /// Returns the legal destinations of the piece on `sq`, in rule order.
    pub fn valid_moves(&self, sq: Square) -> Result<Vec<Square>, BoardError> {
        valid_moves(self, sq)
    }

    /// Returns every legal move of `color`.
    pub fn all_legal_moves(&self, color: Color) -> Result<Vec<Move>, BoardError> {
        all_legal_moves(self, color)
    }

    /// Returns true if `color` is in check.
    pub fn is_in_check(&self, color: Color) -> Result<bool, BoardError> {
        is_in_check(self, color)
    }

    /// Returns true if `color` is checkmated.
    pub fn is_checkmate(&self, color: Color) -> Result<bool, BoardError> {
        is_checkmate(self, color)
    }

    /// Returns whether the side to move has been checkmated.
    pub fn status(&self) -> Result<GameStatus, BoardError> {
        let side = self.turn_color();
        if is_checkmate(self, side)? {
            Ok(GameStatus::Checkmate(side))
        } else {
            Ok(GameStatus::Ongoing)
        }
    }

    /// Plays `mv` if the piece on its origin belongs to the side to move and
    /// the destination is one of its legal moves.
    pub fn attempt_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let piece = self.piece_at(mv.from());
        if piece.is_empty() {
            debug!(%mv, "rejected: empty origin");
            return Err(MoveError::EmptyOrigin(mv.from()));
        }
        self.check_turn(piece.color)?;

        let legal = valid_moves(self, mv.from())?;
        if !legal.contains(&mv.to()) {
            debug!(%mv, "rejected: not a legal destination");
            return Err(MoveError::IllegalMove(mv));
        }

        self.apply(mv);
        Ok(())
    }

    /// Plays a move given in five-character notation (`Pe2e4`).
    ///
    /// The named piece must stand on the origin square.
    pub fn attempt_notation(&mut self, text: &str) -> Result<(), MoveError> {
        let notation = Notation::parse(text)?;
        let piece = self.piece_at(notation.from);
        if piece.kind != notation.kind || piece.color != notation.color {
            debug!(%notation, "rejected: piece mismatch");
            return Err(MoveError::PieceMismatch {
                square: notation.from,
                kind: notation.kind,
                color: notation.color,
            });
        }
        self.check_turn(notation.color)?;
        self.attempt_move(notation.to_move())
    }

    fn check_turn(&self, mover: Color) -> Result<(), MoveError> {
        let expected = self.turn_color();
        if mover != expected {
            debug!(%expected, found = %mover, "rejected: wrong turn");
            return Err(MoveError::WrongTurn {
                expected,
                found: mover,
            });
        }
        Ok(())
    }

    /// Applies a move already known to be legal.
    pub(crate) fn apply(&mut self, mv: Move) {
        let (from, to) = (mv.from(), mv.to());
        let mut piece = self.piece_at(from);

        // A diagonal pawn step onto an empty square is en passant
        if piece.kind == PieceKind::Pawn
            && from.col() != to.col()
            && self.piece_at(to).is_empty()
        {
            self.clear(Square::new(from.row(), to.col()));
        }

        self.clear(from);
        piece.square = to;
        piece.has_moved = true;
        piece.en_passant_eligible =
            piece.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2;
        if piece.kind == PieceKind::Pawn && piece.color.promotion_row() == Some(to.row()) {
            piece.kind = PieceKind::Queen;
            debug!(square = %to, color = %piece.color, "pawn promoted");
        }

        // The right to be taken en passant lasts a single ply
        for other in self.squares.iter_mut() {
            other.en_passant_eligible = false;
        }
        self.place(piece);

        self.ply += 1;
        debug!(%mv, ply = self.ply, "move applied");
    }

    /// Returns a copy of the board with `piece` moved to `to` and, for en
    /// passant, the pawn on `captured` removed. Turn and flags are left as is.
    pub(crate) fn simulate(&self, piece: &Piece, to: Square, captured: Option<Square>) -> Board {
        let mut simulated = self.clone();
        simulated.clear(piece.square);
        if let Some(sq) = captured {
            simulated.clear(sq);
        }
        simulated.place(Piece {
            square: to,
            ..*piece
        });
        simulated
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}
