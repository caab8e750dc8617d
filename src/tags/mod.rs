//! Tag list management
//!
//! [`TagInput`] is the canonical owner of a tag list. Hosts (the terminal
//! widget, the CLI, or anything else) forward user intents into it and
//! re-render from [`TagInput::tags`] and [`TagInput::pending`].

mod events;
mod input;
mod options;
mod seed;

pub use events::{ChangeListeners, TagsChanged};
pub use input::TagInput;
pub use options::{BeforeAdding, TagInputOptions};
pub use seed::SeedTag;
