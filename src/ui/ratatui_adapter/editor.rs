//! Interactive tag editor: terminal setup and the event loop

use super::events::{EventResult, poll_and_handle};
use super::state::TagInputState;
use super::theme::Theme;
use super::widgets::{HelpBar, KeyHint, TagInputWidget, TagLayout};
use crate::ui::error::{Result, UiError};
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, warn};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// How the editing session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorResult {
    /// Tags at the end of the session
    pub tags: Vec<String>,
    /// Whether the user aborted
    pub aborted: bool,
}

impl EditorResult {
    /// Create a finished result
    #[must_use]
    pub const fn finished(tags: Vec<String>) -> Self {
        Self { tags, aborted: false }
    }

    /// Create an aborted result
    #[must_use]
    pub const fn aborted() -> Self {
        Self { tags: Vec::new(), aborted: true }
    }
}

/// Full-screen host for a tag input
pub struct TagEditor {
    theme: Theme,
    title: String,
    tick: Duration,
}

impl TagEditor {
    /// Create a new editor
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            title: "Tags".to_string(),
            tick: Duration::from_millis(100),
        }
    }

    /// Set the widget title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(|e| UiError::TerminalError(e.to_string()))
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), DisableFocusChange, DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Split the screen into the input and the help bar
    fn areas(&self, state: &TagInputState, area: Rect) -> (Rect, Rect) {
        let height = TagInputWidget::required_height(state, area.width)
            .min(area.height.saturating_sub(1));
        let [input, help, _] = Layout::vertical([
            Constraint::Length(height),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);
        (input, help)
    }

    fn draw(&self, frame: &mut Frame, state: &TagInputState, hints: &[KeyHint]) -> TagLayout {
        let (input_area, help_area) = self.areas(state, frame.area());
        frame.render_widget(
            TagInputWidget::new(state, &self.theme).with_title(&self.title),
            input_area,
        );
        frame.render_widget(HelpBar::new(hints, &self.theme), help_area);
        TagInputWidget::layout(state, input_area)
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        state: &mut TagInputState,
    ) -> Result<()> {
        let hints = if state.is_editable() {
            HelpBar::editing_hints()
        } else {
            HelpBar::read_only_hints()
        };

        loop {
            let mut layout = None;
            terminal
                .draw(|frame| layout = Some(self.draw(frame, state, &hints)))
                .map_err(|e| UiError::TerminalError(e.to_string()))?;
            let Some(layout) = layout else {
                return Err(UiError::TerminalError("frame was not drawn".to_string()));
            };

            match poll_and_handle(state, &layout, self.tick)? {
                EventResult::Submit => state.should_exit = true,
                EventResult::Abort => {
                    state.aborted = true;
                    state.should_exit = true;
                }
                EventResult::TagsChanged => debug!("tags now {:?}", state.input.tags()),
                EventResult::Continue | EventResult::Ignored => {}
            }

            if state.should_exit {
                return Ok(());
            }
        }
    }

    /// Run an editing session until the user finishes or aborts
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal cannot be set up or drawn.
    pub fn run(&self, state: &mut TagInputState) -> Result<EditorResult> {
        let mut terminal = Self::setup_terminal()?;

        let result = self.run_loop(&mut terminal, state);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            warn!("terminal cleanup failed: {e}");
        }

        result?;
        if state.aborted {
            Ok(EditorResult::aborted())
        } else {
            Ok(EditorResult::finished(state.input.tags().to_vec()))
        }
    }
}

impl Default for TagEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{TagInput, TagInputOptions};
    use ratatui::backend::TestBackend;

    #[test]
    fn test_editor_result() {
        assert!(EditorResult::aborted().aborted);
        let done = EditorResult::finished(vec!["a".to_string()]);
        assert!(!done.aborted);
        assert_eq!(done.tags, vec!["a"]);
    }

    #[test]
    fn test_draw_returns_rendered_layout() {
        let editor = TagEditor::new().with_title("Labels");
        let state = TagInputState::new(TagInput::with_tags(TagInputOptions::new(), ["ab"]));
        let hints = HelpBar::editing_hints();
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();

        let mut layout = None;
        terminal
            .draw(|frame| layout = Some(editor.draw(frame, &state, &hints)))
            .unwrap();
        let layout = layout.unwrap();

        assert_eq!(layout.inner, Rect::new(1, 1, 38, 1));
        assert_eq!(layout.chips[0].remove, Some(Rect::new(5, 1, 1, 1)));

        let buffer = terminal.backend().buffer();
        let top: String = (0..40).map(|x| buffer[(x, 0)].symbol()).collect();
        assert!(top.starts_with("┌ Labels (1) "));
        let help: String = (0..40).map(|x| buffer[(x, 3)].symbol()).collect();
        assert!(help.starts_with("Enter:add tag"));
    }
}
