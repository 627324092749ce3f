use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::modals::helpers::HelpText;
use crate::state::AppState;
use crate::util::styles::{ACTIVE_COLOR, ERROR_COLOR, HELP_COLOR};
use goldenmile_core::STATUS_READY;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Status text, the last error and key help.
pub struct StatusBar;

impl StatusBar {
    fn first_binding(bindings: &[String]) -> String {
        bindings
            .first()
            .map(|b| format!("[{}]", b))
            .unwrap_or_default()
    }

    fn help_line(state: &AppState) -> Line<'static> {
        let global = &state.keybindings.global;
        HelpText::new()
            .key("[Tab]", Color::Cyan, "next")
            .key(&Self::first_binding(&global.generate), Color::Green, "generate")
            .key(&Self::first_binding(&global.download), Color::Green, "download")
            .key("[PgUp/PgDn]", Color::Cyan, "scroll")
            .key(&Self::first_binding(&global.quit), Color::Yellow, "quit")
            .separator(" | ")
            .line()
    }

    fn status_line(state: &AppState) -> Line<'static> {
        if let Some(error) = &state.view.error_message {
            return Line::from(vec![
                Span::styled("Error: ", Style::default().fg(ERROR_COLOR)),
                Span::raw(error.clone()),
                Span::styled("  (Esc to clear)", Style::default().fg(HELP_COLOR)),
            ]);
        }

        let status = &state.view.status;
        if status.is_empty() {
            return Line::default();
        }

        let color = if status == STATUS_READY {
            ACTIVE_COLOR
        } else {
            Color::Yellow
        };
        let mut spans = vec![Span::styled(status.clone(), Style::default().fg(color))];
        if status == STATUS_READY
            && let Some(at) = &state.last_generated
        {
            spans.push(Span::styled(
                format!("  (generated {})", at.strftime("%H:%M:%S")),
                Style::default().fg(HELP_COLOR),
            ));
        }
        Line::from(spans)
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: &AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let lines = vec![Self::status_line(state), Self::help_line(state)];
        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_error_takes_precedence() {
        let mut state = AppState::default();
        state.view.status = "Generating analysis...".into();
        state.view.error_message = Some("Report generation failed".into());

        assert!(text(&StatusBar::status_line(&state)).starts_with("Error: Report generation failed"));
    }

    #[test]
    fn test_ready_shows_time() {
        let mut state = AppState::default();
        state.view.status = STATUS_READY.into();
        state.last_generated = Some("2025-03-14T09:30:05+05:30[+05:30]".parse().unwrap());

        assert_eq!(
            text(&StatusBar::status_line(&state)),
            "Analysis ready ✔  (generated 09:30:05)"
        );
    }

    #[test]
    fn test_help_uses_configured_keys() {
        let state = AppState::default();
        let help = text(&StatusBar::help_line(&state));
        assert!(help.contains("[ctrl+g] generate"));
        assert!(help.contains("[ctrl+d] download"));
    }
}
