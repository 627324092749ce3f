pub mod button_group;
pub mod form_panel;
pub mod output_panel;
pub mod status_bar;
pub mod text_field;

use ratatui::{Frame, layout::Rect};

use crate::event::AppKeyEvent;
use crate::state::AppState;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled, continue
    Handled,
    /// Event was not handled, pass to parent
    NotHandled,
    /// Request app exit
    Exit,
    /// The user asked to generate a report
    Submit,
    /// The user asked to download the report
    Download,
}

/// Trait for components that can handle input and render
pub trait Component {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult;

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState);
}
