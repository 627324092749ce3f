//! The report form: city and metro groups, the three inputs and the two
//! action buttons.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::button_group::{action_button, button_row};
use super::text_field::{field_line, handle_text_key};
use super::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::{AppKeyEvent, KeyCode};
use crate::state::{AppState, FocusField, TextInput};
use crate::util::format::{budget_hint, size_hint};
use crate::util::styles::{FOCUS_COLOR, HELP_COLOR, focused_block};

const LABEL_WIDTH: usize = 14;
const HINT_WIDTH: usize = 18;

pub struct FormPanel;

impl FormPanel {
    fn handle_city_key(key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        let controller = &mut state.controller;
        let picked = match key.code {
            KeyCode::Left | KeyCode::Char('h') => controller.cycle_city(false).is_some(),
            KeyCode::Right | KeyCode::Char('l') => controller.cycle_city(true).is_some(),
            KeyCode::Enter | KeyCode::Char(' ') if controller.cities().active().is_none() => {
                controller.select_city(0).is_some()
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                controller.select_city(index).is_some()
            }
            _ => return EventResult::NotHandled,
        };

        if picked && let Some(city) = state.controller.selection().city {
            tracing::debug!(city, "City selected");
        }
        EventResult::Handled
    }

    fn handle_metro_key(key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        let controller = &mut state.controller;
        let picked = match key.code {
            KeyCode::Left | KeyCode::Char('h') => controller.cycle_metro(false),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter | KeyCode::Char(' ') => {
                controller.cycle_metro(true)
            }
            KeyCode::Char('y') => controller.select_metro(0),
            KeyCode::Char('n') => controller.select_metro(1),
            _ => return EventResult::NotHandled,
        };

        if let Some(flag) = picked {
            tracing::debug!(metro = %flag, "Metro preference selected");
        }
        EventResult::Handled
    }

    fn handle_text_field(key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        if matches!(key.code, KeyCode::Enter) && key.no_modifiers() {
            state.focus_next();
            return EventResult::Handled;
        }

        let focus = state.focus;
        match state.view.input_mut(focus) {
            Some(input) => {
                if handle_text_key(key, input) {
                    EventResult::Handled
                } else {
                    EventResult::NotHandled
                }
            }
            None => EventResult::NotHandled,
        }
    }

    fn label(text: &str, focused: bool) -> Span<'static> {
        let style = if focused {
            Style::default()
                .fg(FOCUS_COLOR)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Span::styled(format!("{:<width$}", text, width = LABEL_WIDTH), style)
    }

    fn input_line(
        label: &str,
        input: &TextInput,
        focused: bool,
        width: usize,
        placeholder: &str,
        hint: Option<String>,
    ) -> Line<'static> {
        let mut spans = vec![Self::label(label, focused)];
        let field = field_line(input, focused, width, placeholder);
        let used: usize = field.spans.iter().map(|s| s.content.chars().count()).sum();
        spans.extend(field.spans);

        if let Some(hint) = hint {
            spans.push(Span::raw(" ".repeat(width.saturating_sub(used) + 1)));
            spans.push(Span::styled(
                format!("= {}", hint),
                Style::default().fg(HELP_COLOR),
            ));
        }
        Line::from(spans)
    }
}

impl Component for FormPanel {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        let nav = &state.keybindings.navigation;
        if KeybindingsConfig::matches(key, &nav.next_field) {
            state.focus_next();
            return EventResult::Handled;
        }
        if KeybindingsConfig::matches(key, &nav.prev_field) || key.is_back_tab() {
            state.focus_prev();
            return EventResult::Handled;
        }

        if state.focus.is_text() {
            return Self::handle_text_field(key, state);
        }

        if key.ctrl || key.alt {
            return EventResult::NotHandled;
        }

        match key.code {
            KeyCode::Char('j') => {
                state.focus_next();
                return EventResult::Handled;
            }
            KeyCode::Char('k') => {
                state.focus_prev();
                return EventResult::Handled;
            }
            _ => {}
        }

        let activate = matches!(key.code, KeyCode::Enter | KeyCode::Char(' '));
        match state.focus {
            FocusField::City => Self::handle_city_key(key, state),
            FocusField::Metro => Self::handle_metro_key(key, state),
            FocusField::Generate if activate => EventResult::Submit,
            FocusField::Download if activate => {
                if state.view.download_enabled {
                    EventResult::Download
                } else {
                    EventResult::Handled
                }
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = focused_block(" Report Request ", false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let field_width = (inner.width as usize)
            .saturating_sub(LABEL_WIDTH + HINT_WIDTH)
            .max(8);
        let focus = state.focus;
        let view = &state.view;

        let mut lines = vec![Line::default()];

        let mut city = vec![Self::label("City", focus == FocusField::City)];
        city.extend(button_row(state.controller.cities(), focus == FocusField::City).spans);
        lines.push(Line::from(city));

        if let Some(metro) = state.controller.metro() {
            lines.push(Line::default());
            let mut row = vec![Self::label("Near metro", focus == FocusField::Metro)];
            row.extend(button_row(metro, focus == FocusField::Metro).spans);
            lines.push(Line::from(row));
        }

        lines.push(Line::default());
        lines.push(Self::input_line(
            "Budget (Cr)",
            &view.budget,
            focus == FocusField::Budget,
            field_width,
            "e.g. 1.5",
            budget_hint(&view.budget.value),
        ));
        lines.push(Self::input_line(
            "Size (sqft)",
            &view.size,
            focus == FocusField::Size,
            field_width,
            "e.g. 1200",
            size_hint(&view.size.value),
        ));
        lines.push(Self::input_line(
            "Intent",
            &view.intent,
            focus == FocusField::Intent,
            field_width,
            "buy to live, rent, resale...",
            None,
        ));

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH)),
            action_button("Generate", focus == FocusField::Generate, true),
            Span::raw("  "),
            action_button(
                "Download PDF",
                focus == FocusField::Download,
                view.download_enabled,
            ),
        ]));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goldenmile_core::{FormConfig, FormController, MetroFlag};

    fn key(code: KeyCode) -> AppKeyEvent {
        AppKeyEvent::plain(code)
    }

    fn type_text(panel: &mut FormPanel, state: &mut AppState, text: &str) {
        for c in text.chars() {
            panel.handle_key(&key(KeyCode::Char(c)), state);
        }
    }

    #[test]
    fn test_fill_form_with_keys() {
        let mut panel = FormPanel;
        let mut state = AppState::default();

        // City: pick the third one with a digit
        assert_eq!(
            panel.handle_key(&key(KeyCode::Char('3')), &mut state),
            EventResult::Handled
        );
        assert_eq!(state.controller.selection().city, Some("Pune"));

        // Metro: switch to No
        panel.handle_key(&key(KeyCode::Tab), &mut state);
        assert_eq!(state.focus, FocusField::Metro);
        panel.handle_key(&key(KeyCode::Char('n')), &mut state);
        assert_eq!(state.controller.selection().metro, Some(MetroFlag::No));

        panel.handle_key(&key(KeyCode::Tab), &mut state);
        type_text(&mut panel, &mut state, "1.5");
        panel.handle_key(&key(KeyCode::Enter), &mut state);
        type_text(&mut panel, &mut state, "1200");
        panel.handle_key(&key(KeyCode::Enter), &mut state);
        // Letters that are shortcuts elsewhere are typed in text fields
        type_text(&mut panel, &mut state, "jkq rent");

        assert_eq!(state.view.budget.value, "1.5");
        assert_eq!(state.view.size.value, "1200");
        assert_eq!(state.view.intent.value, "jkq rent");

        panel.handle_key(&key(KeyCode::Enter), &mut state);
        assert_eq!(state.focus, FocusField::Generate);
        assert_eq!(
            panel.handle_key(&key(KeyCode::Enter), &mut state),
            EventResult::Submit
        );
    }

    #[test]
    fn test_city_cycling_keeps_one_active() {
        let mut panel = FormPanel;
        let mut state = AppState::default();

        panel.handle_key(&key(KeyCode::Right), &mut state);
        assert_eq!(state.controller.selection().city, Some("Hyderabad"));
        panel.handle_key(&key(KeyCode::Right), &mut state);
        panel.handle_key(&key(KeyCode::Char('l')), &mut state);
        assert_eq!(state.controller.selection().city, Some("Pune"));
        panel.handle_key(&key(KeyCode::Left), &mut state);
        assert_eq!(state.controller.selection().city, Some("Bengaluru"));
    }

    #[test]
    fn test_download_button_respects_enabled_flag() {
        let mut panel = FormPanel;
        let mut state = AppState::default();
        state.focus = FocusField::Download;

        assert_eq!(
            panel.handle_key(&key(KeyCode::Enter), &mut state),
            EventResult::Handled
        );

        state.view.download_enabled = true;
        assert_eq!(
            panel.handle_key(&key(KeyCode::Enter), &mut state),
            EventResult::Download
        );
    }

    #[test]
    fn test_no_metro_row_without_toggle() {
        let mut panel = FormPanel;
        let mut state = AppState::new(
            FormController::new(FormConfig::default().with_metro_toggle(false)),
            KeybindingsConfig::default(),
        );

        panel.handle_key(&key(KeyCode::Tab), &mut state);
        assert_eq!(state.focus, FocusField::Budget);
    }

    #[test]
    fn test_text_field_editing_keys() {
        let mut panel = FormPanel;
        let mut state = AppState::default();
        state.focus = FocusField::Budget;

        type_text(&mut panel, &mut state, "2.55");
        assert_eq!(
            panel.handle_key(&key(KeyCode::Backspace), &mut state),
            EventResult::Handled
        );
        assert_eq!(state.view.budget.value, "2.5");
        assert_eq!(
            panel.handle_key(&key(KeyCode::Esc), &mut state),
            EventResult::NotHandled
        );
    }

    #[test]
    fn test_global_shortcuts_not_swallowed() {
        let mut panel = FormPanel;
        let mut state = AppState::default();
        let ctrl_g = AppKeyEvent {
            ctrl: true,
            ..key(KeyCode::Char('g'))
        };

        assert_eq!(panel.handle_key(&ctrl_g, &mut state), EventResult::NotHandled);
        state.focus = FocusField::Intent;
        assert_eq!(panel.handle_key(&ctrl_g, &mut state), EventResult::NotHandled);
        assert!(state.view.intent.value.is_empty());
    }
}
