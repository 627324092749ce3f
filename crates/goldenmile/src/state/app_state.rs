use goldenmile_core::{
    Alerter, DownloadControl, FormController, FormInputs, OutputSink, StatusSink,
};
use jiff::Zoned;

use super::input::TextInput;
use super::modal::{MessageModal, ModalState};
use crate::data::keybindings_data::KeybindingsConfig;

/// Form fields in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusField {
    City,
    Metro,
    Budget,
    Size,
    Intent,
    Generate,
    Download,
}

impl FocusField {
    const ORDER: [FocusField; 7] = [
        FocusField::City,
        FocusField::Metro,
        FocusField::Budget,
        FocusField::Size,
        FocusField::Intent,
        FocusField::Generate,
        FocusField::Download,
    ];

    /// Next (or previous) field, wrapping around. `Metro` is skipped when the
    /// form has no metro toggle.
    pub fn step(self, forward: bool, has_metro: bool) -> Self {
        let len = Self::ORDER.len();
        let mut index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        loop {
            index = if forward {
                (index + 1) % len
            } else {
                (index + len - 1) % len
            };
            let candidate = Self::ORDER[index];
            if has_metro || candidate != FocusField::Metro {
                return candidate;
            }
        }
    }

    pub fn is_text(self) -> bool {
        matches!(
            self,
            FocusField::Budget | FocusField::Size | FocusField::Intent
        )
    }
}

/// Everything the controller can see or change through its ports.
#[derive(Debug, Default)]
pub struct ViewState {
    pub budget: TextInput,
    pub size: TextInput,
    pub intent: TextInput,
    pub status: String,
    pub output: String,
    pub output_scroll: u16,
    pub download_enabled: bool,
    pub modal: ModalState,
    pub error_message: Option<String>,
}

impl ViewState {
    pub fn input_mut(&mut self, field: FocusField) -> Option<&mut TextInput> {
        match field {
            FocusField::Budget => Some(&mut self.budget),
            FocusField::Size => Some(&mut self.size),
            FocusField::Intent => Some(&mut self.intent),
            _ => None,
        }
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

impl FormInputs for ViewState {
    fn budget(&self) -> &str {
        &self.budget.value
    }

    fn size(&self) -> &str {
        &self.size.value
    }

    fn intent(&self) -> &str {
        &self.intent.value
    }
}

impl StatusSink for ViewState {
    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

impl OutputSink for ViewState {
    fn set_output(&mut self, text: &str) {
        self.output = text.to_string();
        self.output_scroll = 0;
    }
}

impl DownloadControl for ViewState {
    fn set_download_enabled(&mut self, enabled: bool) {
        self.download_enabled = enabled;
    }
}

impl Alerter for ViewState {
    fn alert(&mut self, message: &str) {
        self.modal = ModalState::Message(MessageModal::info("Missing information", message));
    }

    fn show_error(&mut self, message: &str) {
        self.error_message = Some(message.to_string());
        self.modal = ModalState::Message(MessageModal::error("Error", message));
    }
}

pub struct AppState {
    pub controller: FormController,
    pub view: ViewState,
    pub focus: FocusField,
    pub keybindings: KeybindingsConfig,
    /// When the analysis on screen arrived
    pub last_generated: Option<Zoned>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FormController::default(), KeybindingsConfig::default())
    }
}

impl AppState {
    pub fn new(controller: FormController, keybindings: KeybindingsConfig) -> Self {
        Self {
            controller,
            view: ViewState::default(),
            focus: FocusField::City,
            keybindings,
            last_generated: None,
            exit: false,
        }
    }

    pub fn has_metro(&self) -> bool {
        self.controller.metro().is_some()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.step(true, self.has_metro());
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.step(false, self.has_metro());
    }

    /// A text field has focus, so plain letters are typed rather than
    /// treated as shortcuts.
    pub fn is_editing(&self) -> bool {
        self.focus.is_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goldenmile_core::{FormConfig, MetroFlag};

    #[test]
    fn test_focus_order_with_metro() {
        let mut field = FocusField::City;
        let mut seen = vec![field];
        for _ in 0..6 {
            field = field.step(true, true);
            seen.push(field);
        }
        assert_eq!(seen, FocusField::ORDER.to_vec());
        assert_eq!(field.step(true, true), FocusField::City);
        assert_eq!(FocusField::City.step(false, true), FocusField::Download);
    }

    #[test]
    fn test_focus_skips_metro_when_absent() {
        assert_eq!(FocusField::City.step(true, false), FocusField::Budget);
        assert_eq!(FocusField::Budget.step(false, false), FocusField::City);
    }

    #[test]
    fn test_view_state_ports() {
        let mut view = ViewState::default();
        view.output_scroll = 7;

        view.set_output("Good investment.");
        assert_eq!(view.output, "Good investment.");
        assert_eq!(view.output_scroll, 0);

        view.show_error("Report generation failed: request failed: refused");
        assert!(view.error_message.is_some());
        assert!(matches!(&view.modal, ModalState::Message(m) if m.is_error));
    }

    #[test]
    fn test_submit_through_view_state() {
        let mut state = AppState::new(
            FormController::new(FormConfig::default()),
            KeybindingsConfig::default(),
        );
        state.controller.select_city_named("Pune");
        state.controller.set_metro(MetroFlag::No);
        state.view.budget = TextInput::new("1.2");
        state.view.size = TextInput::new("1500");
        state.view.intent = TextInput::new("rent");

        let submission = state.controller.begin_submit(&mut state.view).unwrap();
        assert_eq!(submission.request.city, "Pune");
        assert_eq!(submission.request.metro, Some(MetroFlag::No));
        assert_eq!(state.view.status, goldenmile_core::STATUS_GENERATING);
        assert!(!state.view.download_enabled);
    }

    #[test]
    fn test_alert_when_incomplete() {
        let mut state = AppState::default();
        assert!(state.controller.begin_submit(&mut state.view).is_err());
        assert!(matches!(&state.view.modal, ModalState::Message(m) if !m.is_error));
    }
}
