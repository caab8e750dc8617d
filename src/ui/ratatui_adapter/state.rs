//! Host-side state for the tag editor
//!
//! Wraps a [`TagInput`] with what only the visual shell cares about: the
//! cursor inside the pending entry, the focus flag, and which keys commit.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tags::TagInput;
use crate::ui::error::{Result, UiError};

/// Parse a commit key name ("enter", "tab", "space" or one character)
///
/// # Errors
/// Returns `UiError::UnknownKey` for anything else.
pub fn parse_commit_key(name: &str) -> Result<KeyCode> {
    let lowered = name.to_lowercase();
    match lowered.as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "tab" => Ok(KeyCode::Tab),
        "space" => Ok(KeyCode::Char(' ')),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(KeyCode::Char(c)),
                _ => Err(UiError::UnknownKey(name.to_string())),
            }
        }
    }
}

/// Editor state: the tag input plus presentation state
#[derive(Debug)]
pub struct TagInputState {
    /// The tag list manager being edited
    pub input: TagInput,
    /// Cursor position in the pending entry (character index, not byte)
    pub cursor: usize,
    /// Whether the input currently has focus
    pub active: bool,
    /// Keys that commit the pending entry
    pub commit_keys: Vec<KeyCode>,
    /// Commit the pending entry when focus is lost
    pub add_tag_on_blur: bool,
    /// The last commit attempt was rejected; cleared by the next edit
    pub rejected: bool,
    /// Whether the event loop should stop
    pub should_exit: bool,
    /// Whether the user aborted (Ctrl-C)
    pub aborted: bool,
}

impl TagInputState {
    /// Create state around an input. Starts focused, committing on Enter.
    #[must_use]
    pub fn new(input: TagInput) -> Self {
        Self {
            input,
            cursor: 0,
            active: true,
            commit_keys: vec![KeyCode::Enter],
            add_tag_on_blur: false,
            rejected: false,
            should_exit: false,
            aborted: false,
        }
    }

    /// Use the given key names as commit keys
    ///
    /// # Errors
    /// Returns `UiError::UnknownKey` if a name cannot be parsed.
    pub fn with_commit_keys<S: AsRef<str>>(mut self, names: &[S]) -> Result<Self> {
        self.commit_keys = names
            .iter()
            .map(|name| parse_commit_key(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    #[must_use]
    pub const fn with_add_tag_on_blur(mut self, enabled: bool) -> Self {
        self.add_tag_on_blur = enabled;
        self
    }

    /// Whether `key` commits the pending entry
    ///
    /// Only plain or shifted presses count, so Ctrl shortcuts keep their
    /// editing meaning even when their letter is a commit key.
    #[must_use]
    pub fn is_commit_key(&self, key: &KeyEvent) -> bool {
        matches!(key.modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT)
            && self.commit_keys.contains(&key.code)
    }

    /// Whether the pending entry can be edited at all
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        !self.input.is_read_only()
    }

    /// Get byte index from cursor (character) position
    fn byte_index(&self) -> usize {
        let pending = self.input.pending();
        pending
            .char_indices()
            .nth(self.cursor)
            .map_or(pending.len(), |(i, _)| i)
    }

    fn pending_chars(&self) -> usize {
        self.input.pending().chars().count()
    }

    /// Insert a character at cursor position
    pub fn insert_char(&mut self, c: char) {
        if !self.is_editable() {
            return;
        }
        let byte_idx = self.byte_index();
        self.input.pending_mut().insert(byte_idx, c);
        self.cursor += 1;
        self.rejected = false;
    }

    /// Backspace: delete before the cursor, or drop the last tag when the
    /// pending entry is empty
    pub fn backspace(&mut self) -> bool {
        if !self.is_editable() {
            return false;
        }
        if self.input.pending().is_empty() {
            return self.input.remove_last_tag();
        }
        if self.cursor > 0 {
            let byte_idx = self.byte_index();
            let pending = self.input.pending_mut();
            let prev_byte_idx = pending[..byte_idx]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            pending.remove(prev_byte_idx);
            self.cursor -= 1;
            self.rejected = false;
        }
        false
    }

    /// Delete character at cursor (delete key)
    pub fn delete(&mut self) {
        if !self.is_editable() {
            return;
        }
        let byte_idx = self.byte_index();
        let pending = self.input.pending_mut();
        if byte_idx < pending.len() {
            pending.remove(byte_idx);
            self.rejected = false;
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.pending_chars() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.pending_chars();
    }

    /// Clear word backwards (Ctrl+W)
    pub fn delete_word_backwards(&mut self) {
        if !self.is_editable() {
            return;
        }
        let byte_idx = self.byte_index();
        let pending = self.input.pending_mut();
        let trimmed = pending[..byte_idx].trim_end();
        let new_end = trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());

        pending.drain(new_end..byte_idx);
        self.cursor = pending[..new_end].chars().count();
        self.rejected = false;
    }

    /// Clear the whole pending entry (Ctrl+U)
    pub fn clear_line(&mut self) {
        if !self.is_editable() {
            return;
        }
        self.input.clear_pending();
        self.cursor = 0;
        self.rejected = false;
    }

    /// Try to turn the pending entry into a tag
    pub fn commit(&mut self) -> bool {
        if !self.is_editable() {
            return false;
        }
        let added = self.input.add_new();
        if added {
            self.cursor = 0;
            self.rejected = false;
        } else {
            self.rejected = !self.input.pending().trim().is_empty();
            self.cursor = self.cursor.min(self.pending_chars());
        }
        added
    }

    /// Remove the tag at `index` (chip click)
    pub fn remove(&mut self, index: usize) -> bool {
        self.input.remove(index)
    }

    /// Host reported focus
    pub fn focus(&mut self) {
        self.active = true;
    }

    /// Host reported blur; commits first when configured to
    pub fn blur(&mut self) -> bool {
        self.active = false;
        self.add_tag_on_blur && self.commit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::TagInputOptions;
    use crate::validation::ValidationMode;

    fn state_with(tags: &[&str]) -> TagInputState {
        TagInputState::new(TagInput::with_tags(TagInputOptions::new(), tags.iter().copied()))
    }

    fn type_str(state: &mut TagInputState, text: &str) {
        for c in text.chars() {
            state.insert_char(c);
        }
    }

    #[test]
    fn test_parse_commit_key() {
        assert_eq!(parse_commit_key("enter").unwrap(), KeyCode::Enter);
        assert_eq!(parse_commit_key("Tab").unwrap(), KeyCode::Tab);
        assert_eq!(parse_commit_key("space").unwrap(), KeyCode::Char(' '));
        assert_eq!(parse_commit_key(",").unwrap(), KeyCode::Char(','));
        assert_eq!(parse_commit_key(";").unwrap(), KeyCode::Char(';'));
        assert!(parse_commit_key("ctrl-x").is_err());
        assert!(parse_commit_key("").is_err());
    }

    #[test]
    fn test_typing_and_commit() {
        let mut state = state_with(&[]);
        type_str(&mut state, "héllo");
        assert_eq!(state.input.pending(), "héllo");
        assert_eq!(state.cursor, 5);

        assert!(state.commit());
        assert_eq!(state.input.tags(), ["héllo"]);
        assert_eq!(state.input.pending(), "");
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_rejected_commit_keeps_text_and_flags() {
        let options = TagInputOptions::new().with_validation(ValidationMode::Digits);
        let mut state = TagInputState::new(TagInput::new(options));
        type_str(&mut state, "abc");
        assert!(!state.commit());
        assert!(state.rejected);
        assert_eq!(state.input.pending(), "abc");

        state.backspace();
        assert!(!state.rejected);
        assert_eq!(state.input.pending(), "ab");
    }

    #[test]
    fn test_backspace_on_empty_removes_last_tag() {
        let mut state = state_with(&["a", "b"]);
        assert!(state.backspace());
        assert_eq!(state.input.tags(), ["a"]);

        type_str(&mut state, "x");
        assert!(!state.backspace());
        assert_eq!(state.input.pending(), "");
        assert_eq!(state.input.tags(), ["a"]);
    }

    #[test]
    fn test_cursor_movement() {
        let mut state = state_with(&[]);
        type_str(&mut state, "hello");

        state.cursor_left();
        assert_eq!(state.cursor, 4);
        state.cursor_home();
        assert_eq!(state.cursor, 0);
        state.cursor_left();
        assert_eq!(state.cursor, 0);
        state.cursor_end();
        assert_eq!(state.cursor, 5);
        state.cursor_right();
        assert_eq!(state.cursor, 5);

        state.cursor_home();
        state.delete();
        assert_eq!(state.input.pending(), "ello");
    }

    #[test]
    fn test_delete_word_backwards() {
        let mut state = state_with(&[]);
        type_str(&mut state, "hello world");

        state.delete_word_backwards();
        assert_eq!(state.input.pending(), "hello ");
        assert_eq!(state.cursor, 6);

        state.delete_word_backwards();
        assert_eq!(state.input.pending(), "");
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_delete_word_backwards_after_wide_space() {
        let mut state = state_with(&[]);
        type_str(&mut state, "new\u{a0}york");

        state.delete_word_backwards();
        assert_eq!(state.input.pending(), "new\u{a0}");
        assert_eq!(state.cursor, 4);

        type_str(&mut state, "delhi\u{3000}");
        state.delete_word_backwards();
        assert_eq!(state.input.pending(), "new\u{a0}");
        assert_eq!(state.cursor, 4);
    }

    #[test]
    fn test_commit_key_ignores_ctrl_chords() {
        let state = state_with(&[]).with_commit_keys(&["a", ","]).unwrap();
        let plain = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        let shifted = KeyEvent::new(KeyCode::Char(','), KeyModifiers::SHIFT);
        let ctrl = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);

        assert!(state.is_commit_key(&plain));
        assert!(state.is_commit_key(&shifted));
        assert!(!state.is_commit_key(&ctrl));
    }

    #[test]
    fn test_focus_and_blur() {
        let mut state = state_with(&[]);
        state.blur();
        assert!(!state.active);
        state.focus();
        assert!(state.active);
    }

    #[test]
    fn test_blur_commits_when_enabled() {
        let mut state = state_with(&[]).with_add_tag_on_blur(true);
        type_str(&mut state, "pending");
        assert!(state.blur());
        assert_eq!(state.input.tags(), ["pending"]);

        let mut state = state_with(&[]);
        type_str(&mut state, "pending");
        assert!(!state.blur());
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_read_only_ignores_editing() {
        let options = TagInputOptions::new().with_read_only(true);
        let mut state = TagInputState::new(TagInput::with_tags(options, ["a"]));
        type_str(&mut state, "b");
        assert_eq!(state.input.pending(), "");
        assert!(!state.backspace());
        assert!(!state.commit());
        assert!(!state.remove(0));
        assert_eq!(state.input.tags(), ["a"]);
    }
}
