//! The interactive move loop.
//!
//! The shell owns the live board. Each line is parsed, acted on, and the
//! prompt comes back; a rejected move never touches the board, so retrying
//! is just reading the next line.

use crate::command::{Command, HELP};
use crate::config::Config;
use crate::render::render;
use chess_core::{Color, Move, Notation};
use chess_engine::{perft, Board, BoardError, GameStatus, MoveError};
use std::io::{BufRead, Write};

/// Display settings taken from the config.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub unicode: bool,
    pub show_legal_moves: bool,
}

impl From<&Config> for Options {
    fn from(config: &Config) -> Self {
        Self {
            unicode: config.unicode,
            show_legal_moves: config.show_legal_moves,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The given color was checkmated.
    Checkmate(Color),
    /// The given color's king was captured.
    KingLost(Color),
    Quit,
    EndOfInput,
}

pub struct Shell<R: BufRead, W: Write> {
    board: Board,
    options: Options,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(board: Board, options: Options, reader: R, writer: W) -> Self {
        Self {
            board,
            options,
            reader,
            writer,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs until checkmate, a missing king, `quit`, or end of input.
    ///
    /// Kings are not attackers, so one king may take the other; the side
    /// left without a king loses.
    pub fn run(&mut self) -> anyhow::Result<Outcome> {
        self.draw()?;
        loop {
            match self.board.status() {
                Ok(GameStatus::Ongoing) => {}
                Ok(GameStatus::Checkmate(loser)) => {
                    writeln!(self.writer, "Checkmate. {} wins.", loser.opposite())?;
                    tracing::info!(%loser, ply = self.board.ply(), "checkmate");
                    return Ok(Outcome::Checkmate(loser));
                }
                Err(BoardError::KingNotFound(loser)) => {
                    writeln!(
                        self.writer,
                        "{} king was captured. {} wins.",
                        loser,
                        loser.opposite()
                    )?;
                    tracing::info!(%loser, ply = self.board.ply(), "king captured");
                    return Ok(Outcome::KingLost(loser));
                }
            }

            write!(self.writer, "{} to move> ", self.board.turn_color())?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                writeln!(self.writer)?;
                return Ok(Outcome::EndOfInput);
            }

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.writer, "{}", e)?;
                    continue;
                }
            };

            match command {
                Command::Empty => {}
                Command::Quit => return Ok(Outcome::Quit),
                Command::Help => writeln!(self.writer, "{}", HELP)?,
                Command::Board => self.draw()?,
                Command::Placement => writeln!(self.writer, "{}", self.board.to_placement())?,
                Command::Moves => self.list_moves()?,
                Command::Perft(depth) => {
                    let nodes = perft(&self.board, depth)?;
                    writeln!(self.writer, "perft {}: {} nodes", depth, nodes)?;
                }
                Command::Play(text) => self.play(&text)?,
            }
        }
    }

    fn play(&mut self, text: &str) -> anyhow::Result<()> {
        match self.board.attempt_notation(text) {
            Ok(()) => {
                tracing::debug!(text, "move played");
                self.draw()
            }
            Err(MoveError::Board(e)) => Err(e.into()),
            Err(e) => {
                tracing::debug!(text, error = %e, "move rejected");
                writeln!(self.writer, "Rejected: {}", e)?;
                if let MoveError::IllegalMove(mv) = e {
                    self.hint(mv)?;
                }
                Ok(())
            }
        }
    }

    /// Lists where the piece could have gone instead.
    fn hint(&mut self, mv: Move) -> anyhow::Result<()> {
        if !self.options.show_legal_moves {
            return Ok(());
        }
        let targets = self.board.valid_moves(mv.from())?;
        if targets.is_empty() {
            writeln!(self.writer, "The piece on {} cannot move.", mv.from())?;
        } else {
            writeln!(
                self.writer,
                "Legal moves from {}: {}",
                mv.from(),
                join(targets.iter().map(|sq| sq.to_algebraic()))
            )?;
        }
        Ok(())
    }

    fn list_moves(&mut self) -> anyhow::Result<()> {
        let color = self.board.turn_color();
        let moves = self.board.all_legal_moves(color)?;
        let notations = moves.iter().map(|m| {
            let piece = self.board.piece_at(m.from());
            Notation {
                kind: piece.kind,
                color: piece.color,
                from: m.from(),
                to: m.to(),
            }
            .to_string()
        });
        writeln!(self.writer, "{} moves: {}", moves.len(), join(notations))?;
        Ok(())
    }

    fn draw(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", render(&self.board, self.options.unicode))?;
        Ok(())
    }
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const OPTIONS: Options = Options {
        unicode: false,
        show_legal_moves: true,
    };

    fn run(board: Board, input: &str) -> (anyhow::Result<Outcome>, Board, String) {
        let mut output = Vec::new();
        let mut shell = Shell::new(board, OPTIONS, Cursor::new(input.as_bytes()), &mut output);
        let result = shell.run();
        let board = shell.board().clone();
        drop(shell);
        (result, board, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_quit() {
        let (result, board, _) = run(Board::startpos(), "quit\n");
        assert_eq!(result.unwrap(), Outcome::Quit);
        assert_eq!(board, Board::startpos());
    }

    #[test]
    fn test_end_of_input() {
        let (result, _, _) = run(Board::startpos(), "");
        assert_eq!(result.unwrap(), Outcome::EndOfInput);
    }

    #[test]
    fn test_plays_moves_until_checkmate() {
        let input = "Pf2f3\npe7e5\nPg2g4\nqd8h4\nmoves\n";
        let (result, board, output) = run(Board::startpos(), input);
        assert_eq!(result.unwrap(), Outcome::Checkmate(Color::White));
        assert_eq!(board.ply(), 4);
        assert!(output.contains("Checkmate. Black wins."));
    }

    #[test]
    fn test_illegal_move_is_retried() {
        let (result, board, output) = run(Board::startpos(), "Pe2e5\nPe2e4\nquit\n");
        assert_eq!(result.unwrap(), Outcome::Quit);
        assert!(output.contains("Rejected: illegal move: e2e5"));
        assert!(output.contains("Legal moves from e2: e3 e4"));
        assert_eq!(board.ply(), 1);
    }

    #[test]
    fn test_rejections_print_reason() {
        let (_, board, output) = run(Board::startpos(), "pe7e5\nxyz\nNe2e4\nquit\n");
        assert!(output.contains("Rejected: White is expected to play, not Black"));
        assert!(output.contains("Rejected: invalid notation: expected 5 characters, got 3"));
        assert!(output.contains("Rejected: no White Knight on e2"));
        assert_eq!(board, Board::startpos());
    }

    #[test]
    fn test_hint_can_be_disabled() {
        let mut output = Vec::new();
        let options = Options {
            unicode: false,
            show_legal_moves: false,
        };
        let input = Cursor::new("Pe2e5\nquit\n".as_bytes());
        let mut shell = Shell::new(Board::startpos(), options, input, &mut output);
        shell.run().unwrap();
        drop(shell);
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Rejected"));
        assert!(!output.contains("Legal moves from"));
    }

    #[test]
    fn test_moves_and_placement() {
        let (_, _, output) = run(Board::startpos(), "moves\nfen\nquit\n");
        assert!(output.contains("20 moves: Pa2a3 Pa2a4 Pb2b3"));
        assert!(output.contains("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"));
    }

    #[test]
    fn test_perft_command() {
        let (_, _, output) = run(Board::startpos(), "perft 2\nperft x\nquit\n");
        assert!(output.contains("perft 2: 400 nodes"));
        assert!(output.contains("invalid perft depth 'x'"));
    }

    #[test]
    fn test_captured_king_ends_the_game() {
        let board = Board::from_placement("8/8/8/3k4/8/3K4/8/8").unwrap();
        let (result, board, output) = run(board, "Kd3d4\nkd5d4\nquit\n");
        assert_eq!(result.unwrap(), Outcome::KingLost(Color::White));
        assert_eq!(board.ply(), 2);
        assert!(output.contains("White king was captured. Black wins."));
    }

    #[test]
    fn test_missing_king_loses_at_once() {
        let board = Board::from_placement("4k3/8/8/8/8/8/8/8").unwrap();
        let (result, board, _) = run(board, "quit\n");
        assert_eq!(result.unwrap(), Outcome::KingLost(Color::White));
        assert_eq!(board.ply(), 0);
    }
}
