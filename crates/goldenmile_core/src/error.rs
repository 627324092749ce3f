use std::fmt;

/// Longest slice of a response body quoted in an error message.
const BODY_EXCERPT_LEN: usize = 200;

/// A required form field that was left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    City,
    Budget,
    Size,
    Intent,
}

impl MissingField {
    pub fn label(&self) -> &'static str {
        match self {
            MissingField::City => "city",
            MissingField::Budget => "budget",
            MissingField::Size => "size",
            MissingField::Intent => "intent",
        }
    }
}

/// The form failed its precondition check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub missing: Vec<MissingField>,
}

impl ValidationError {
    /// Comma-separated labels of the missing fields.
    pub fn missing_labels(&self) -> String {
        self.missing
            .iter()
            .map(MissingField::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (missing: {})",
            crate::controller::ALERT_MISSING_FIELDS,
            self.missing_labels()
        )
    }
}

impl std::error::Error for ValidationError {}

/// Why a report request did not produce an analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Request could not be encoded
    Encode(String),
    /// Connection, TLS or timeout failure
    Network(String),
    /// Backend answered with a non-success status
    Status { code: u16, body: String },
    /// Success status but the body was not `{ "analysis": string }`
    Malformed(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Encode(msg) => write!(f, "could not encode request: {msg}"),
            FailureReason::Network(msg) => write!(f, "request failed: {msg}"),
            FailureReason::Status { code, body } => {
                let excerpt = body_excerpt(body);
                if excerpt.is_empty() {
                    write!(f, "server returned HTTP {code}")
                } else {
                    write!(f, "server returned HTTP {code}: {excerpt}")
                }
            }
            FailureReason::Malformed(msg) => write!(f, "unexpected response: {msg}"),
        }
    }
}

impl std::error::Error for FailureReason {}

/// First line of a body, cut to a readable length.
pub fn body_excerpt(body: &str) -> String {
    let line = body.trim().lines().next().unwrap_or_default();
    if line.chars().count() <= BODY_EXCERPT_LEN {
        return line.to_string();
    }
    let cut: String = line.chars().take(BODY_EXCERPT_LEN).collect();
    format!("{cut}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let err = ValidationError {
            missing: vec![MissingField::City, MissingField::Intent],
        };
        assert_eq!(
            err.to_string(),
            "Please fill all fields and select a city (missing: city, intent)"
        );
    }

    #[test]
    fn test_status_display_uses_first_line() {
        let reason = FailureReason::Status {
            code: 400,
            body: "No report generated yet\nmore".to_string(),
        };
        assert_eq!(
            reason.to_string(),
            "server returned HTTP 400: No report generated yet"
        );
    }

    #[test]
    fn test_status_display_empty_body() {
        let reason = FailureReason::Status {
            code: 502,
            body: "  ".to_string(),
        };
        assert_eq!(reason.to_string(), "server returned HTTP 502");
    }

    #[test]
    fn test_body_excerpt_truncates() {
        let body = "x".repeat(500);
        let excerpt = body_excerpt(&body);
        assert_eq!(excerpt.chars().count(), BODY_EXCERPT_LEN + 1);
        assert!(excerpt.ends_with('…'));
    }
}
