//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for focused panels
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Active choice in a button group, and the "ready" status
pub const ACTIVE_COLOR: Color = Color::Green;

pub const ERROR_COLOR: Color = Color::Red;

/// Create a block with a title that shows focused state via border color.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Style of one button.
///
/// Active buttons are filled, the focused one is underlined and disabled
/// buttons are dimmed regardless of the rest.
pub fn button_style(active: bool, focused: bool, enabled: bool) -> Style {
    if !enabled {
        return Style::default().fg(HELP_COLOR);
    }

    let mut style = if active {
        Style::default()
            .bg(ACTIVE_COLOR)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    if focused {
        style = style.add_modifier(Modifier::UNDERLINED).fg(if active {
            Color::Black
        } else {
            FOCUS_COLOR
        });
    }
    style
}
