//! Parsing of the player's typed commands.

use chess_core::Coord;
use thiserror::Error;

/// A parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pick a square. Coordinates are passed through unchecked; the position
    /// ignores picks off the board.
    Pick { row: i32, col: i32 },
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("empty input")]
    Empty,
    #[error("unrecognised input `{0}`: enter a square like e2, a `row col` pair, or quit")]
    Unrecognised(String),
}

/// Parses `e2`, `6 4`, or `quit`.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }
    if matches!(line.to_ascii_lowercase().as_str(), "quit" | "exit" | "q") {
        return Ok(Command::Quit);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [square] => Coord::from_algebraic(square)
            .map(|c| Command::Pick {
                row: i32::from(c.row()),
                col: i32::from(c.col()),
            })
            .ok_or_else(|| InputError::Unrecognised(line.to_string())),
        [row, col] => match (row.parse::<i32>(), col.parse::<i32>()) {
            (Ok(row), Ok(col)) => Ok(Command::Pick { row, col }),
            _ => Err(InputError::Unrecognised(line.to_string())),
        },
        _ => Err(InputError::Unrecognised(line.to_string())),
    }
}
