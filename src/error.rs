use std::path::PathBuf;

use crate::board::Coord;

/// Error returned when trying to get moves or play on a board that is already done.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, thiserror::Error)]
#[error("the board is done")]
pub struct BoardDone;

/// Errors returned by [Board::play](crate::board::Board::play).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, thiserror::Error)]
pub enum PlayError {
    #[error("the board is done")]
    BoardDone,

    #[error("cell {0} is outside the board")]
    OutOfBounds(Coord),

    #[error("cell {0} is already occupied")]
    Occupied(Coord),

    #[error("cannot play an empty mark")]
    EmptyMark,
}

impl From<BoardDone> for PlayError {
    fn from(_: BoardDone) -> Self {
        PlayError::BoardDone
    }
}

/// Errors caused by invalid board or search parameters.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("win length {length} must be in 1..={max}")]
    InvalidWinLength { length: usize, max: usize },

    #[error("minimum line length {length} must be in 1..={max}")]
    InvalidLineLength { length: usize, max: usize },

    #[error("search depth must be > 0")]
    InvalidDepth,

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Error returned when parsing the text form of a board fails.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("invalid board syntax at {0:?}")]
    Syntax(String),

    #[error("row {row} has {len} cells, expected {expected}")]
    Ragged { row: usize, len: usize, expected: usize },

    #[error("invalid win length: {0}")]
    WinLength(String),
}
