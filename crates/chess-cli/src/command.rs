//! Shell command parsing.

use thiserror::Error;

/// Deepest perft the shell will run.
pub const MAX_PERFT_DEPTH: u32 = 4;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("perft needs a depth, e.g. `perft 3`")]
    MissingDepth,
    #[error("invalid perft depth '{0}' (expected 0 to {max})", max = MAX_PERFT_DEPTH)]
    InvalidDepth(String),
}

/// A line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a move in five-character notation.
    Play(String),
    /// List the legal moves of the side to move.
    Moves,
    /// Redraw the board.
    Board,
    /// Print the placement string of the current position.
    Placement,
    /// Count move-tree leaves to the given depth.
    Perft(u32),
    Help,
    Quit,
    /// Blank line.
    Empty,
}

impl Command {
    /// Parses one input line. Anything that is not a keyword is taken as a
    /// move and left to the notation parser.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let mut parts = input.split_whitespace();

        let cmd = parts.next().unwrap_or("");

        match cmd {
            "" => Ok(Command::Empty),
            "moves" => Ok(Command::Moves),
            "board" => Ok(Command::Board),
            "fen" | "placement" => Ok(Command::Placement),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "perft" => {
                let depth = parts.next().ok_or(CommandError::MissingDepth)?;
                match depth.parse() {
                    Ok(n) if n <= MAX_PERFT_DEPTH => Ok(Command::Perft(n)),
                    _ => Err(CommandError::InvalidDepth(depth.to_string())),
                }
            }
            _ => Ok(Command::Play(input.to_string())),
        }
    }
}

pub const HELP: &str = "\
Commands:
  Pe2e4      play a move: piece letter (uppercase White), origin, destination
  moves      list legal moves for the side to move
  board      redraw the board
  fen        print the board placement
  perft N    count move-tree leaves to depth N (at most 4)
  quit       leave the shell";
