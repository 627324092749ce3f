//! Rendering helpers shared by modals and form fields.

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect;

// ========== Cursor Rendering ==========

/// Render a line of text with a visible cursor at `cursor_pos` (in chars).
///
/// The cursor is drawn as an inverted cell; at the end of the text it is a
/// blank block.
pub fn render_cursor_line(display_value: &str, cursor_pos: usize, prefix: &str) -> Line<'static> {
    let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
    let mut spans = Vec::new();

    if !prefix.is_empty() {
        spans.push(Span::raw(prefix.to_string()));
    }

    let before: String = display_value.chars().take(cursor_pos).collect();
    let mut rest = display_value.chars().skip(cursor_pos);

    if !before.is_empty() {
        spans.push(Span::raw(before));
    }
    match rest.next() {
        Some(c) => {
            spans.push(Span::styled(c.to_string(), cursor_style));
            let after: String = rest.collect();
            if !after.is_empty() {
                spans.push(Span::raw(after));
            }
        }
        None => spans.push(Span::styled(" ", cursor_style)),
    }

    Line::from(spans)
}

// ========== Horizontal Scroll ==========

/// Visible window of a text input that is wider than its container.
pub struct ScrolledView {
    pub display_value: String,
    /// Cursor position within `display_value`
    pub cursor_pos: usize,
}

/// Keep the cursor visible in a field `max_width` cells wide, leaving one
/// cell for the end-of-text cursor.
pub fn calculate_scroll(value: &str, cursor_pos: usize, max_width: usize) -> ScrolledView {
    let visible = max_width.saturating_sub(1).max(1);
    let len = value.chars().count();

    if len < visible || cursor_pos < visible {
        return ScrolledView {
            display_value: value.chars().take(visible).collect(),
            cursor_pos,
        };
    }

    let start = cursor_pos + 1 - visible;
    ScrolledView {
        display_value: value.chars().skip(start).take(visible).collect(),
        cursor_pos: cursor_pos - start,
    }
}

// ========== Modal Frame ==========

pub struct ModalFrame {
    /// The inner area (inside the border)
    pub inner: Rect,
    pub chunks: Rc<[Rect]>,
}

/// Center a bordered, titled box over the screen and split its inside
/// vertically by `constraints`.
pub fn render_modal_frame(
    frame: &mut Frame,
    title: &str,
    width: u16,
    height: u16,
    border_color: Color,
    constraints: &[Constraint],
) -> ModalFrame {
    let modal_area = centered_rect(width, height, frame.area());

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", title));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    ModalFrame { inner, chunks }
}

// ========== Help Text Builder ==========

/// Builder for key help such as `[Enter] Confirm  [Esc] Cancel`.
pub struct HelpText {
    items: Vec<(String, Color, String)>,
    separator: String,
}

impl HelpText {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            separator: "  ".to_string(),
        }
    }

    pub fn separator(mut self, sep: &str) -> Self {
        self.separator = sep.to_string();
        self
    }

    pub fn key(mut self, key: &str, color: Color, desc: &str) -> Self {
        self.items.push((key.to_string(), color, desc.to_string()));
        self
    }

    pub fn line(self) -> Line<'static> {
        let mut spans: Vec<Span> = Vec::new();

        for (i, (key, color, desc)) in self.items.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(self.separator.clone()));
            }
            spans.push(Span::styled(key, Style::default().fg(color)));
            spans.push(Span::raw(format!(" {}", desc)));
        }

        Line::from(spans)
    }

    pub fn build(self) -> Paragraph<'static> {
        Paragraph::new(self.line())
    }

    pub fn build_centered(self) -> Paragraph<'static> {
        self.build().alignment(Alignment::Center)
    }
}

impl Default for HelpText {
    fn default() -> Self {
        Self::new()
    }
}
