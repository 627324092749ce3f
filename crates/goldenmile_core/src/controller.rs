//! The report form controller.
//!
//! Owns the selection state and turns user actions into port calls. Submission
//! is split in two halves so front-ends can run the request wherever suits
//! them (a worker thread, a browser future, or inline):
//!
//! 1. [`FormController::begin_submit`] validates, updates the view and hands
//!    back a [`Submission`] carrying the request and a [`Ticket`].
//! 2. [`FormController::finish_submit`] applies the outcome for that ticket.
//!
//! Only the most recent ticket is applied, so overlapping submissions cannot
//! leave the view showing an older answer.

use crate::config::FormConfig;
use crate::error::{MissingField, ValidationError};
use crate::model::{MetroFlag, ReportRequest};
use crate::numeric::parse_float;
use crate::ports::{FormInputs, FormView, Navigator};
use crate::selection::{ButtonGroup, Selection};
use crate::transport::{ReportTransport, SubmitOutcome};

pub const ALERT_MISSING_FIELDS: &str = "Please fill all fields and select a city";
pub const STATUS_GENERATING: &str = "Generating analysis...";
pub const STATUS_READY: &str = "Analysis ready ✔";

/// Sequence number of an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A validated request waiting to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub ticket: Ticket,
    pub request: ReportRequest,
}

/// Whether an outcome reached the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Applied,
    /// A newer submission has been made since; the outcome was dropped.
    Stale,
}

#[derive(Debug, Clone)]
pub struct FormController {
    config: FormConfig,
    cities: ButtonGroup<String>,
    metro: Option<ButtonGroup<MetroFlag>>,
    last_ticket: u64,
    pending: Option<Ticket>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl FormController {
    pub fn new(config: FormConfig) -> Self {
        let cities = ButtonGroup::new(config.cities.clone());
        // Metro starts on "Yes" before any click
        let metro = config
            .metro_toggle
            .then(|| ButtonGroup::with_active(MetroFlag::ALL.to_vec(), 0));

        Self {
            config,
            cities,
            metro,
            last_ticket: 0,
            pending: None,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn cities(&self) -> &ButtonGroup<String> {
        &self.cities
    }

    pub fn metro(&self) -> Option<&ButtonGroup<MetroFlag>> {
        self.metro.as_ref()
    }

    // ========== Selection ==========

    pub fn select_city(&mut self, index: usize) -> Option<&str> {
        self.cities.activate(index).map(String::as_str)
    }

    /// Select a city by name, ignoring ASCII case.
    pub fn select_city_named(&mut self, name: &str) -> Option<&str> {
        let name = name.trim();
        self.cities
            .activate_where(|c| c.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }

    /// Step the city selection left or right.
    pub fn cycle_city(&mut self, forward: bool) -> Option<&str> {
        self.cities.activate_next(forward).map(String::as_str)
    }

    pub fn select_metro(&mut self, index: usize) -> Option<MetroFlag> {
        self.metro.as_mut()?.activate(index).copied()
    }

    /// Set the metro flag. Returns `false` when the form has no metro toggle.
    pub fn set_metro(&mut self, flag: MetroFlag) -> bool {
        match self.metro.as_mut() {
            Some(group) => group.activate_where(|f| *f == flag).is_some(),
            None => false,
        }
    }

    pub fn cycle_metro(&mut self, forward: bool) -> Option<MetroFlag> {
        self.metro.as_mut()?.activate_next(forward).copied()
    }

    pub fn selection(&self) -> Selection<'_> {
        Selection {
            city: self.cities.active().map(String::as_str),
            metro: self.metro.as_ref().and_then(|g| g.active().copied()),
        }
    }

    // ========== Submit ==========

    /// Whether a submission is waiting for its outcome.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate the inputs against the current selection and build a request.
    ///
    /// Budget and size are parsed leniently; unparseable text becomes `NaN`
    /// and is sent as-is.
    pub fn build_request<I: FormInputs + ?Sized>(
        &self,
        inputs: &I,
    ) -> Result<ReportRequest, ValidationError> {
        let selection = self.selection();
        let mut missing = Vec::new();

        if selection.city.is_none() {
            missing.push(MissingField::City);
        }
        if is_blank(inputs.budget()) {
            missing.push(MissingField::Budget);
        }
        if is_blank(inputs.size()) {
            missing.push(MissingField::Size);
        }
        if is_blank(inputs.intent()) {
            missing.push(MissingField::Intent);
        }

        let Some(city) = selection.city.filter(|_| missing.is_empty()) else {
            return Err(ValidationError { missing });
        };

        Ok(ReportRequest {
            city: city.to_string(),
            budget: parse_float(inputs.budget()),
            size: parse_float(inputs.size()),
            intent: inputs.intent().to_string(),
            metro: selection.metro,
        })
    }

    /// First half of a submission.
    ///
    /// On a validation failure the view only receives an alert. Otherwise the
    /// status shows progress, the output is cleared and download is disabled.
    pub fn begin_submit<V: FormView + ?Sized>(
        &mut self,
        view: &mut V,
    ) -> Result<Submission, ValidationError> {
        let request = match self.build_request(&*view) {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(missing = %err.missing_labels(), "Report form incomplete");
                view.alert(ALERT_MISSING_FIELDS);
                return Err(err);
            }
        };

        view.set_status(STATUS_GENERATING);
        view.set_output("");
        view.set_download_enabled(false);

        self.last_ticket += 1;
        let ticket = Ticket(self.last_ticket);
        self.pending = Some(ticket);

        tracing::info!(
            ticket = ticket.value(),
            city = %request.city,
            "Submitting report request"
        );

        Ok(Submission { ticket, request })
    }

    /// Second half of a submission.
    pub fn finish_submit<V: FormView + ?Sized>(
        &mut self,
        view: &mut V,
        ticket: Ticket,
        outcome: &SubmitOutcome,
    ) -> Applied {
        if self.pending != Some(ticket) {
            tracing::debug!(
                ticket = ticket.value(),
                latest = self.last_ticket,
                "Dropping outcome of superseded submission"
            );
            return Applied::Stale;
        }
        self.pending = None;

        match outcome {
            SubmitOutcome::Success(analysis) => {
                view.set_output(analysis);
                view.set_status(STATUS_READY);
                view.set_download_enabled(true);
                tracing::info!(ticket = ticket.value(), "Report ready");
            }
            SubmitOutcome::Failure(reason) => {
                view.set_status("");
                view.show_error(&format!("Report generation failed: {reason}"));
                tracing::warn!(ticket = ticket.value(), error = %reason, "Report generation failed");
            }
        }

        Applied::Applied
    }

    /// Run a whole submission inline against a blocking transport.
    pub fn generate_report<V, T>(
        &mut self,
        view: &mut V,
        transport: &T,
    ) -> Result<SubmitOutcome, ValidationError>
    where
        V: FormView + ?Sized,
        T: ReportTransport + ?Sized,
    {
        let submission = self.begin_submit(view)?;
        let outcome = transport.generate(&self.config.endpoints.generate, &submission.request);
        self.finish_submit(view, submission.ticket, &outcome);
        Ok(outcome)
    }

    // ========== Download ==========

    /// Send the user to the download endpoint.
    ///
    /// This is a navigation, never a background request from the controller.
    pub fn download_report<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        tracing::info!(path = %self.config.endpoints.download, "Navigating to report download");
        navigator.navigate(&self.config.endpoints.download);
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
