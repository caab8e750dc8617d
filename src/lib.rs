//! Taginput - turn typed text into a list of discrete tags
//!
//! The core of this library is [`TagInput`], a headless tag list manager:
//! it owns an ordered list of tags plus the entry the user is still typing,
//! accepts or silently rejects new entries (duplicates, failed validation,
//! read-only mode), and notifies listeners whenever the list changes.
//!
//! The [`ui`] module hosts a `TagInput` in a terminal widget, [`cli`] parses
//! the command line and [`commands`] runs it for the `taginput` binary.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod tags;
pub mod ui;
pub mod validation;

pub use tags::{BeforeAdding, SeedTag, TagInput, TagInputOptions, TagsChanged};
pub use validation::{ValidationMode, Validator};

/// Error enum, contains all failure states of the program
///
/// Rejected tag edits are not errors; they never reach this type.
#[derive(Debug, Error)]
pub enum TagInputError {
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON serialization error
    #[error("Serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Unknown validation mode name
    #[error("Unknown validation mode '{0}' (expected none, text, digits, email, url or isodate)")]
    UnknownValidation(String),
    /// Custom validation regex failed to compile
    #[error("Invalid validation pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Result type for fallible (non tag-editing) operations
pub type Result<T> = std::result::Result<T, TagInputError>;
