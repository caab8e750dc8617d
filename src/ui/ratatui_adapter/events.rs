//! Event handling for the tag editor
//!
//! Maps crossterm key, mouse and focus events onto [`TagInputState`]
//! operations.

use super::state::TagInputState;
use super::widgets::{Hit, TagLayout};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// The tag list changed
    TagsChanged,
    /// Finish editing and keep the result
    Submit,
    /// Finish editing and discard the result
    Abort,
    /// No action taken
    Ignored,
}

impl EventResult {
    const fn changed(changed: bool) -> Self {
        if changed { Self::TagsChanged } else { Self::Continue }
    }
}

/// Handle a key press
pub fn handle_key(state: &mut TagInputState, key: KeyEvent) -> EventResult {
    if key.kind == KeyEventKind::Release {
        return EventResult::Ignored;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return EventResult::Abort,
        (KeyCode::Esc, _) => return EventResult::Submit,
        _ => {}
    }

    if !state.is_editable() {
        return match key.code {
            KeyCode::Enter | KeyCode::Char('q') => EventResult::Submit,
            _ => EventResult::Ignored,
        };
    }

    // Enter in an empty field finishes, even when Enter is a commit key
    if key.code == KeyCode::Enter && state.input.pending().trim().is_empty() {
        return EventResult::Submit;
    }

    if state.is_commit_key(&key) {
        state.focus();
        return EventResult::changed(state.commit());
    }

    state.focus();
    match (key.code, key.modifiers) {
        (KeyCode::Backspace, _) => EventResult::changed(state.backspace()),
        (KeyCode::Delete, _) => {
            state.delete();
            EventResult::Continue
        }
        (KeyCode::Left, _) => {
            state.cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.cursor_right();
            EventResult::Continue
        }
        (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
            state.cursor_home();
            EventResult::Continue
        }
        (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
            state.cursor_end();
            EventResult::Continue
        }
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
            state.delete_word_backwards();
            EventResult::Continue
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.clear_line();
            EventResult::Continue
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.insert_char(c);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Handle a mouse event against the last rendered layout
pub fn handle_mouse(state: &mut TagInputState, mouse: MouseEvent, layout: &TagLayout) -> EventResult {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return EventResult::Ignored;
    }

    match layout.hit_test(mouse.column, mouse.row) {
        Hit::Remove(index) => {
            state.focus();
            EventResult::changed(state.remove(index))
        }
        Hit::Chip(_) | Hit::Input => {
            state.focus();
            EventResult::Continue
        }
        Hit::Outside => EventResult::changed(state.blur()),
    }
}

/// Handle any terminal event
pub fn handle_event(state: &mut TagInputState, event: Event, layout: &TagLayout) -> EventResult {
    match event {
        Event::Key(key) => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse, layout),
        Event::FocusGained => {
            state.focus();
            EventResult::Continue
        }
        Event::FocusLost => EventResult::changed(state.blur()),
        Event::Resize(_, _) => EventResult::Continue,
        Event::Paste(text) => {
            for c in text.chars().filter(|c| !c.is_control()) {
                state.insert_char(c);
            }
            EventResult::Continue
        }
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(
    state: &mut TagInputState,
    layout: &TagLayout,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }
    Ok(handle_event(state, event::read()?, layout))
}
