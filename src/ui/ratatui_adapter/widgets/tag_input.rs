//! Tag input widget
//!
//! Renders the tag list as chips, each with a `×` remove affordance, followed
//! by the editable pending entry. Chips flow left to right and wrap. Read-only
//! inputs show neither the affordances nor the entry field.
//!
//! Geometry is computed by [`TagLayout::compute`], shared between rendering
//! and mouse hit-testing so a click always lands on what was drawn.

use crate::ui::ratatui_adapter::state::TagInputState;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// Minimum width reserved for the entry field before it wraps to a new row
const MIN_INPUT_WIDTH: u16 = 12;

/// Width of the `× ` suffix on removable chips
const REMOVE_WIDTH: u16 = 2;

/// Where one chip was placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipSlot {
    /// Index of the tag in the list
    pub index: usize,
    /// Full chip area
    pub area: Rect,
    /// The `×` cell, when the chip is removable
    pub remove: Option<Rect>,
}

/// What a screen position points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The remove affordance of the tag at this index
    Remove(usize),
    /// The body of the tag at this index
    Chip(usize),
    /// The entry field or empty space inside the input
    Input,
    /// Outside the input
    Outside,
}

/// Placement of chips and entry field inside the widget's inner area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLayout {
    pub inner: Rect,
    pub chips: Vec<ChipSlot>,
    pub input: Option<Rect>,
    /// Rows used, which may exceed `inner.height`
    pub rows: u16,
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

impl TagLayout {
    /// Flow chips (and the entry field when editable) into `inner`
    #[must_use]
    pub fn compute(tags: &[String], pending_width: u16, editable: bool, inner: Rect) -> Self {
        let right = inner.x.saturating_add(inner.width);
        let mut x = inner.x;
        let mut y = inner.y;
        let mut chips = Vec::with_capacity(tags.len());

        for (index, tag) in tags.iter().enumerate() {
            let suffix = if editable { REMOVE_WIDTH } else { 0 };
            let width = text_width(tag)
                .saturating_add(2 + suffix)
                .min(inner.width);
            if x > inner.x && x.saturating_add(width) > right {
                x = inner.x;
                y = y.saturating_add(1);
            }
            let area = Rect::new(x, y, width, 1);
            let remove = (editable && width >= REMOVE_WIDTH)
                .then(|| Rect::new(x + width - REMOVE_WIDTH, y, 1, 1));
            chips.push(ChipSlot { index, area, remove });
            x = x.saturating_add(width).saturating_add(1);
        }

        let input = editable.then(|| {
            let wanted = pending_width.saturating_add(1).max(MIN_INPUT_WIDTH).min(inner.width);
            if x > inner.x && right.saturating_sub(x) < wanted {
                x = inner.x;
                y = y.saturating_add(1);
            }
            Rect::new(x, y, right.saturating_sub(x), 1)
        });

        Self {
            inner,
            chips,
            input,
            rows: y - inner.y + 1,
        }
    }

    /// Resolve a screen position
    #[must_use]
    pub fn hit_test(&self, column: u16, row: u16) -> Hit {
        let position = Position::new(column, row);
        for chip in &self.chips {
            if chip.remove.is_some_and(|r| r.contains(position)) {
                return Hit::Remove(chip.index);
            }
            if chip.area.contains(position) {
                return Hit::Chip(chip.index);
            }
        }
        if self.inner.contains(position) {
            Hit::Input
        } else {
            Hit::Outside
        }
    }
}

/// Tag input widget
pub struct TagInputWidget<'a> {
    state: &'a TagInputState,
    theme: &'a Theme,
    title: &'a str,
}

impl<'a> TagInputWidget<'a> {
    #[must_use]
    pub const fn new(state: &'a TagInputState, theme: &'a Theme) -> Self {
        Self { state, theme, title: "Tags" }
    }

    #[must_use]
    pub const fn with_title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    fn block(state: &TagInputState, theme: &Theme, title: &str) -> Block<'static> {
        let count = match state.input.options().limit {
            Some(limit) => format!("{}/{limit}", state.input.len()),
            None => state.input.len().to_string(),
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(state.active))
            .title(format!(" {title} ({count}) "));
        if state.input.is_read_only() {
            block = block.title(Line::from(" read-only ").alignment(Alignment::Right));
        }
        block
    }

    /// Layout for the given outer area
    #[must_use]
    pub fn layout(state: &TagInputState, area: Rect) -> TagLayout {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        TagLayout::compute(
            state.input.tags(),
            text_width(state.input.pending()),
            state.is_editable(),
            inner,
        )
    }

    /// Outer height needed to show every row at the given outer width
    #[must_use]
    pub fn required_height(state: &TagInputState, width: u16) -> u16 {
        let layout = Self::layout(state, Rect::new(0, 0, width, u16::MAX / 2));
        layout.rows.saturating_add(2)
    }

    fn render_chip(&self, tag: &str, slot: &ChipSlot, buf: &mut Buffer) {
        let label_width = usize::from(slot.area.width.saturating_sub(if slot.remove.is_some() {
            REMOVE_WIDTH + 2
        } else {
            2
        }));
        let label: String = tag.chars().take(label_width).collect();

        let mut spans = vec![Span::styled(format!(" {label} "), self.theme.chip_style())];
        if slot.remove.is_some() {
            spans.push(Span::styled("×", self.theme.remove_style()));
            spans.push(Span::styled(" ", self.theme.chip_style()));
        }
        Line::from(spans).render(slot.area, buf);
    }

    fn render_entry(&self, area: Rect, buf: &mut Buffer) {
        let pending = self.state.input.pending();
        let display_width = usize::from(area.width).saturating_sub(1);

        if pending.is_empty() {
            let placeholder = &self.state.input.options().placeholder;
            let mut spans = Vec::new();
            if self.state.active {
                spans.push(Span::styled(" ", self.theme.cursor_style()));
            }
            spans.push(Span::styled(placeholder.clone(), self.theme.dimmed_style()));
            Line::from(spans).render(area, buf);
            return;
        }

        // Calculate visible window of text
        let cursor = self.state.cursor;
        let total_chars = pending.chars().count();
        let start_char = if total_chars <= display_width || cursor <= display_width / 2 {
            0
        } else if cursor + display_width / 2 >= total_chars {
            total_chars.saturating_sub(display_width)
        } else {
            cursor.saturating_sub(display_width / 2)
        };
        let visible: String = pending.chars().skip(start_char).take(display_width).collect();
        let cursor_offset = cursor - start_char;

        let text_style = if self.state.rejected {
            self.theme.error_style()
        } else {
            self.theme.normal_style()
        };

        let line = if self.state.active {
            let before: String = visible.chars().take(cursor_offset).collect();
            let at: String = visible.chars().skip(cursor_offset).take(1).collect();
            let after: String = visible.chars().skip(cursor_offset + 1).collect();
            let at = if at.is_empty() { " ".to_string() } else { at };
            Line::from(vec![
                Span::styled(before, text_style),
                Span::styled(at, self.theme.cursor_style()),
                Span::styled(after, text_style),
            ])
        } else {
            Line::from(Span::styled(visible, text_style))
        };
        line.render(area, buf);
    }
}

impl Widget for TagInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Self::block(self.state, self.theme, self.title);
        let layout = Self::layout(self.state, area);
        block.render(area, buf);

        let bottom = layout.inner.y.saturating_add(layout.inner.height);
        let tags = self.state.input.tags();

        if tags.is_empty() && layout.input.is_none() {
            Line::styled("No tags", self.theme.dimmed_style()).render(layout.inner, buf);
            return;
        }

        for slot in layout.chips.iter().filter(|slot| slot.area.y < bottom) {
            self.render_chip(&tags[slot.index], slot, buf);
        }

        if let Some(input) = layout.input.filter(|input| input.y < bottom) {
            self.render_entry(input, buf);
        }
    }
}
