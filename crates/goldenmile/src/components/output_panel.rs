use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::format::terminal_safe;
use crate::util::styles::{HELP_COLOR, focused_block};

const SCROLL_STEP: u16 = 10;

/// Shows the analysis text verbatim, wrapped to the panel width.
pub struct OutputPanel;

impl Component for OutputPanel {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        let nav = &state.keybindings.navigation;
        if KeybindingsConfig::matches(key, &nav.scroll_down) {
            let max = state.view.output.lines().count() as u16;
            state.view.output_scroll = (state.view.output_scroll + SCROLL_STEP).min(max);
            EventResult::Handled
        } else if KeybindingsConfig::matches(key, &nav.scroll_up) {
            state.view.output_scroll = state.view.output_scroll.saturating_sub(SCROLL_STEP);
            EventResult::Handled
        } else {
            EventResult::NotHandled
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = focused_block(" Analysis ", false);

        let paragraph = if state.view.output.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "Fill in the form and press Generate to get an analysis.",
                Style::default().fg(HELP_COLOR),
            )))
        } else {
            Paragraph::new(terminal_safe(&state.view.output)).scroll((state.view.output_scroll, 0))
        };

        frame.render_widget(paragraph.wrap(Wrap { trim: false }).block(block), area);
    }
}
