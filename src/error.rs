use std::path::PathBuf;

/// Reasons a column drop is rejected. A rejected drop never mutates the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize)]
#[serde(tag = "reason")]
pub enum MoveError {
    #[error("column {column} is out of range (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is already over")]
    GameAlreadyOver,
}

/// Errors that can occur when loading configuration or sizing a board.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("board of {rows}x{cols} cannot hold four in a row (minimum is 4x4)")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
