//! Recording fakes for the controller's ports.

use std::cell::{Cell, RefCell};

use crate::model::ReportRequest;
use crate::ports::{Alerter, DownloadControl, FormInputs, Navigator, OutputSink, StatusSink};
use crate::transport::{ReportTransport, SubmitOutcome};

#[derive(Debug, Default)]
pub struct RecordingView {
    pub budget: String,
    pub size: String,
    pub intent: String,
    pub status: String,
    pub output: String,
    pub download_enabled: bool,
    pub alerts: Vec<String>,
    pub errors: Vec<String>,
}

impl RecordingView {
    pub fn filled(budget: &str, size: &str, intent: &str) -> Self {
        Self {
            budget: budget.to_string(),
            size: size.to_string(),
            intent: intent.to_string(),
            ..Self::default()
        }
    }
}

impl FormInputs for RecordingView {
    fn budget(&self) -> &str {
        &self.budget
    }

    fn size(&self) -> &str {
        &self.size
    }

    fn intent(&self) -> &str {
        &self.intent
    }
}

impl StatusSink for RecordingView {
    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

impl OutputSink for RecordingView {
    fn set_output(&mut self, text: &str) {
        self.output = text.to_string();
    }
}

impl DownloadControl for RecordingView {
    fn set_download_enabled(&mut self, enabled: bool) {
        self.download_enabled = enabled;
    }
}

impl Alerter for RecordingView {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

/// Transport that answers every request with a fixed outcome.
pub struct StubTransport {
    outcome: SubmitOutcome,
    pub calls: Cell<usize>,
    pub last_request: RefCell<Option<(String, ReportRequest)>>,
}

impl StubTransport {
    pub fn new(outcome: SubmitOutcome) -> Self {
        Self {
            outcome,
            calls: Cell::new(0),
            last_request: RefCell::new(None),
        }
    }

    pub fn analysis(text: &str) -> Self {
        Self::new(SubmitOutcome::Success(text.to_string()))
    }
}

impl ReportTransport for StubTransport {
    fn generate(&self, endpoint: &str, request: &ReportRequest) -> SubmitOutcome {
        self.calls.set(self.calls.get() + 1);
        *self.last_request.borrow_mut() = Some((endpoint.to_string(), request.clone()));
        self.outcome.clone()
    }
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub visited: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, path: &str) {
        self.visited.push(path.to_string());
    }
}
