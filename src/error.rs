use std::path::PathBuf;

use crate::game::MoveError;

/// Errors the AI engine can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AiError {
    #[error("no legal moves: every column is full")]
    NoLegalMoves,
}

/// Errors from driving a session's AI seat.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session has no AI seat")]
    NoAiSeat,

    #[error("it is not the AI's turn")]
    NotAiTurn,

    #[error("AI error: {0}")]
    Ai(#[from] AiError),

    #[error("move rejected: {0}")]
    Move(#[from] MoveError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
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
