//! Ratatui widgets for the tag editor

mod help_bar;
mod tag_input;

pub use help_bar::{HelpBar, KeyHint};
pub use tag_input::{ChipSlot, Hit, TagInputWidget, TagLayout};
