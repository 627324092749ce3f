//! Exclusive button rows (city, metro) and single action buttons.

use std::fmt::Display;

use goldenmile_core::ButtonGroup;
use ratatui::text::{Line, Span};

use crate::util::styles::button_style;

/// One row of buttons; the active one is filled.
///
/// Nothing is filled until the user picks something, so an unset group is
/// visible at a glance.
pub fn button_row<T: Display>(group: &ButtonGroup<T>, focused: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(group.len() * 2);
    for (i, option) in group.options().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let active = group.is_active(i);
        let focus_here = focused && (active || (group.active_index().is_none() && i == 0));
        spans.push(Span::styled(
            format!(" {} ", option),
            button_style(active, focus_here, true),
        ));
    }
    Line::from(spans)
}

/// A standalone action button such as `[ Generate ]`.
pub fn action_button(label: &str, focused: bool, enabled: bool) -> Span<'static> {
    Span::styled(format!("[ {} ]", label), button_style(false, focused, enabled))
}
