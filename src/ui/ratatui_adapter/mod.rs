//! Ratatui-based tag editor
//!
//! Hosts a [`TagInput`](crate::TagInput) in the terminal using ratatui for
//! widgets and crossterm for the backend and events.
//!
//! # Features
//!
//! - **Chips** with a clickable `×` remove affordance
//! - **Inline entry field** with cursor, placeholder and readline-style shortcuts
//! - **Configurable commit keys** (Enter, Tab, `,` by default)
//! - **Focus tracking** from terminal focus events and mouse clicks
//! - **Read-only mode** without entry field or remove affordances

mod editor;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use editor::{EditorResult, TagEditor};
pub use events::{EventResult, handle_event, handle_key, handle_mouse, poll_and_handle};
pub use state::{TagInputState, parse_commit_key};
pub use theme::Theme;
