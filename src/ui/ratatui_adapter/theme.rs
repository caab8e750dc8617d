//! Color theme definitions for the tag editor

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for tag chips
    pub tag_bg: Color,
    /// Foreground color for tag chips
    pub tag_fg: Color,
    /// Color for the chip remove affordance
    pub remove: Color,
    /// Color for the cursor block
    pub cursor: Color,
    /// Border color while the input has focus
    pub active_border: Color,
    /// Border color while the input is unfocused
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for a pending entry that was just rejected
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            tag_bg: Color::Cyan,
            tag_fg: Color::Black,
            remove: Color::Red,
            cursor: Color::Cyan,
            active_border: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            error: Color::Red,
        }
    }

    /// Style for the body of a tag chip
    #[must_use]
    pub fn chip_style(&self) -> Style {
        Style::default()
            .bg(self.tag_bg)
            .fg(self.tag_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for plain text
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the `×` on a chip
    #[must_use]
    pub fn remove_style(&self) -> Style {
        Style::default().bg(self.tag_bg).fg(self.remove)
    }

    /// Style for the cursor block
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default().bg(self.cursor).fg(Color::Black)
    }

    /// Style for key names in hints
    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default().fg(self.cursor).add_modifier(Modifier::BOLD)
    }

    /// Border style, depending on focus
    #[must_use]
    pub fn border_style(&self, active: bool) -> Style {
        if active {
            Style::default().fg(self.active_border)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Style for dimmed text (placeholder, hints)
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for a rejected pending entry
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }
}
