//! Error type for parsing and command handling.
//!
//! Rule-level refusals (illegal moves, wrong side, empty origin) are not
//! errors; they come back as `MoveOutcome` values. `ChessError` only covers
//! text that could not be understood: FEN strings, square names, terminal
//! commands and configuration values.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A FEN string could not be parsed. Payload: what was wrong.
    InvalidFen(String),
    /// A square name or index was malformed or off the board.
    InvalidSquare(String),
    /// A terminal command was unknown or missing arguments.
    InvalidCommand(String),
    /// A configuration flag or environment value was not recognised.
    InvalidConfig(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessError::InvalidSquare(msg) => write!(f, "invalid square: {msg}"),
            ChessError::InvalidCommand(msg) => write!(f, "invalid command: {msg}"),
            ChessError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl Error for ChessError {}
