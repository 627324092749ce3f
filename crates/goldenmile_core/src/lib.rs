//! Advisory report form controller
//!
//! This crate holds everything about the report form that does not touch a
//! terminal, a browser or a socket:
//! - The request/response wire model for the `/generate` endpoint
//! - JavaScript-compatible number parsing and JSON number encoding
//! - Exclusive button groups for the city and metro selections
//! - The ports a front-end implements, and the controller that drives them
//! - The transport contract and shared response decoding

// ============================================================================
// Core modules
// ============================================================================

pub mod controller;
pub mod selection;
pub mod transport;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod error;
pub mod model;
pub mod numeric;
pub mod ports;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{Endpoints, FormConfig, join_url};
pub use controller::{
    ALERT_MISSING_FIELDS, Applied, FormController, STATUS_GENERATING, STATUS_READY, Submission,
    Ticket,
};
pub use error::{FailureReason, MissingField, ValidationError};
pub use model::{MetroFlag, ReportRequest, ReportResponse};
pub use numeric::parse_float;
pub use ports::{Alerter, DownloadControl, FormInputs, FormView, Navigator, OutputSink, StatusSink};
pub use selection::{ButtonGroup, Selection};
pub use transport::{ReportTransport, SubmitOutcome, decode_generate_response};
