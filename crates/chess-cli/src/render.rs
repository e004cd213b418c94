//! Terminal board renderer.
//!
//! Row 0 (rank 8) is drawn at the top, so White plays up the screen.

use chess_core::{Color, Piece, PieceKind, Square};
use chess_engine::Board;

/// Render the board with file and rank labels on every side.
pub fn render(board: &Board, unicode: bool) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            let piece = board.piece_at(Square::new(row, col));
            out.push(glyph(&piece, unicode));

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn glyph(piece: &Piece, unicode: bool) -> char {
    if !unicode {
        return piece.to_char().unwrap_or('.');
    }
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
        _ => '·',
    }
}
