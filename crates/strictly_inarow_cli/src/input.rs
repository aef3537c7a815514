//! Parsing typed input into commands.

use derive_more::{Display, Error};
use strictly_inarow::Position;
use tracing::instrument;

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's mark.
    Place(Position),
    /// Abandon the current game and start over.
    NewGame,
    /// Show the help text.
    Help,
    /// Leave the program.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Blank line.
    #[display("Enter a move as `row col`, or `help`")]
    Empty,

    /// Not a command and not a pair of coordinates.
    #[display("Unrecognized input `{}`; enter a move as `row col`, or `help`", _0)]
    Unrecognized(#[error(not(source))] String),
}

/// Help text listing the accepted commands.
pub const HELP: &str = "\
Commands:
  row col   place a mark, e.g. `0 2` or `0,2` (0-based)
  new       restart the game
  help      show this message
  quit      leave

Once a game is over, any other input starts a new game.";

/// Parses one line of input.
#[instrument]
pub fn parse(line: &str) -> Result<Command, InputError> {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "" => Err(InputError::Empty),
        "n" | "new" => Ok(Command::NewGame),
        "h" | "?" | "help" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        _ => parse_position(trimmed).map(Command::Place),
    }
}

/// Parses `row col`, `row,col` or `row, col`.
pub fn parse_position(text: &str) -> Result<Position, InputError> {
    let unrecognized = || InputError::Unrecognized(text.trim().to_string());

    let mut parts = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());

    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(unrecognized());
    };

    let row = row.parse::<usize>().map_err(|_| unrecognized())?;
    let col = col.parse::<usize>().map_err(|_| unrecognized())?;
    Ok(Position::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates() {
        for line in ["1 2", "1,2", " 1, 2 ", "1\t2"] {
            assert_eq!(parse(line), Ok(Command::Place(Position::new(1, 2))), "{line:?}");
        }
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse("new"), Ok(Command::NewGame));
        assert_eq!(parse("Q"), Ok(Command::Quit));
        assert_eq!(parse("help"), Ok(Command::Help));
        assert_eq!(parse("   "), Err(InputError::Empty));
    }

    #[test]
    fn test_rejects_garbage() {
        for line in ["1", "1 2 3", "a b", "-1 0", "1;2"] {
            assert!(
                matches!(parse(line), Err(InputError::Unrecognized(_))),
                "{line:?}"
            );
        }
    }

    #[test]
    fn test_out_of_range_numbers_still_parse() {
        // Bounds are the board's business.
        assert_eq!(parse_position("9 9"), Ok(Position::new(9, 9)));
    }
}
