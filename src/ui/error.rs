//! UI error types

use thiserror::Error;

/// Errors that can occur while running the terminal editor
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal could not be prepared or restored
    #[error("Terminal error: {0}")]
    TerminalError(String),

    /// IO error during UI operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A key name in the configuration could not be understood
    #[error("Unknown key '{0}' (expected enter, tab, space or a single character)")]
    UnknownKey(String),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
