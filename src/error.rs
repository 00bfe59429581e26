//! Error type shared by every bot operation.

use thiserror::Error;

/// Errors raised by the bot and its collaborators.
///
/// Every variant is a local contract violation reported to the immediate
/// caller. Nothing is retried internally, and a failed operation leaves the
/// bot state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BotError {
    #[error("unrecognized difficulty tier: {0:?}")]
    InvalidDifficulty(String),

    #[error("unrecognized role: {0:?}")]
    InvalidRole(String),

    #[error("no empty cell left on the board")]
    NoEmptyCell,

    #[error("no live line to choose a move from")]
    NoCandidateLine,

    #[error("cell {index} holds invalid value {value}")]
    InvalidCellValue { index: usize, value: u8 },

    #[error("cell index {index} out of range for board of {len} cells")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("board must have {expected} cells, got {actual}")]
    InvalidBoardSize { expected: usize, actual: usize },

    /// A line was built with a length other than 5 or 6, or with an index
    /// outside the grid.
    #[error("malformed line of length {len}")]
    MalformedLine { len: usize },

    #[error("cannot analyse an empty line")]
    EmptyLine,

    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BotError::InvalidDifficulty("medium".into()).to_string(),
            "unrecognized difficulty tier: \"medium\""
        );
        assert_eq!(
            BotError::InvalidRole("referee".into()).to_string(),
            "unrecognized role: \"referee\""
        );
        assert_eq!(
            BotError::InvalidCellValue { index: 3, value: 7 }.to_string(),
            "cell 3 holds invalid value 7"
        );
        assert_eq!(
            BotError::InvalidBoardSize { expected: 36, actual: 35 }.to_string(),
            "board must have 36 cells, got 35"
        );
    }
}
