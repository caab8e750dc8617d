//! Terminal host for a [`TagInput`](crate::TagInput)
//!
//! The tag list manager knows nothing about rendering. This module is the
//! visual shell around it: it turns keystrokes, clicks and focus changes into
//! manager operations and redraws from the manager's current state.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            TagEditor (event loop)       │
//! └────────────────┬────────────────────────┘
//!                  │ crossterm events
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │  TagInputState (cursor, focus flag)     │
//! │    └── TagInput (tags, pending entry)   │
//! └────────────────┬────────────────────────┘
//!                  │ rendered by
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │  TagInputWidget + HelpBar (ratatui)     │
//! └─────────────────────────────────────────┘
//! ```

pub mod error;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use ratatui_adapter::{EditorResult, TagEditor, TagInputState, Theme};
