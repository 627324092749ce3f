//! Network contract for report generation.

use crate::error::FailureReason;
use crate::model::{ReportRequest, ReportResponse};

/// Result of one report submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The analysis text, verbatim
    Success(String),
    Failure(FailureReason),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success(_))
    }
}

/// Blocking transport for `POST <endpoint>`.
///
/// Implementations report every failure as [`SubmitOutcome::Failure`];
/// nothing is allowed to escape as a panic or an unhandled error.
pub trait ReportTransport {
    fn generate(&self, endpoint: &str, request: &ReportRequest) -> SubmitOutcome;
}

/// Turn an HTTP status and body into an outcome.
///
/// Shared by every transport so they agree on what counts as success.
pub fn decode_generate_response(status: u16, body: &str) -> SubmitOutcome {
    if !(200..300).contains(&status) {
        return SubmitOutcome::Failure(FailureReason::Status {
            code: status,
            body: body.to_string(),
        });
    }

    match serde_json::from_str::<ReportResponse>(body) {
        Ok(response) => SubmitOutcome::Success(response.analysis),
        Err(e) => SubmitOutcome::Failure(FailureReason::Malformed(e.to_string())),
    }
}
