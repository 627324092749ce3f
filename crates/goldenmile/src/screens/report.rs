//! The single screen: form on the left, analysis on the right. On narrow
//! terminals the two stack vertically.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::form_panel::FormPanel;
use crate::components::output_panel::OutputPanel;
use crate::components::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::AppState;

const SIDE_BY_SIDE_MIN_WIDTH: u16 = 110;

pub struct ReportScreen {
    form: FormPanel,
    output: OutputPanel,
}

impl ReportScreen {
    pub fn new() -> Self {
        Self {
            form: FormPanel,
            output: OutputPanel,
        }
    }

    fn split(area: Rect, form_rows: u16) -> (Rect, Rect) {
        let chunks = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area)
        } else {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(form_rows), Constraint::Min(3)])
                .split(area)
        };
        (chunks[0], chunks[1])
    }
}

impl Default for ReportScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ReportScreen {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        match self.output.handle_key(key, state) {
            EventResult::NotHandled => self.form.handle_key(key, state),
            result => result,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        // Blank line, city, inputs, blank, buttons, borders; plus metro rows
        let form_rows = if state.has_metro() { 12 } else { 10 };
        let (form_area, output_area) = Self::split(area, form_rows);
        self.form.render(frame, form_area, state);
        self.output.render(frame, output_area, state);
    }
}
