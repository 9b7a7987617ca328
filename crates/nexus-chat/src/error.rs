//! Error types for the chat crate.

use thiserror::Error;

/// Errors surfaced by text-generation collaborators.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The provider call failed (network, auth, or API error).
    #[error("provider error: {0}")]
    Provider(String),
    /// The provider returned a body that could not be interpreted.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    /// The streamed response terminated abnormally.
    #[error("stream error: {0}")]
    Stream(String),
}

/// Errors returned by the history store.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// IO error while reading or writing the history file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The persisted history could not be parsed.
    #[error("corrupt history: {0}")]
    Corrupt(#[from] serde_json::Error),
}
