use std::fmt;

use serde::{Deserialize, Serialize};

use crate::numeric::js_number;

/// Whether the buyer wants to be close to a metro line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MetroFlag {
    #[default]
    Yes,
    No,
}

impl MetroFlag {
    /// Button order in the metro group.
    pub const ALL: [MetroFlag; 2] = [MetroFlag::Yes, MetroFlag::No];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetroFlag::Yes => "Yes",
            MetroFlag::No => "No",
        }
    }

    /// Lenient parse for command-line and config input.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" | "1" => Some(MetroFlag::Yes),
            "no" | "n" | "false" | "0" => Some(MetroFlag::No),
            _ => None,
        }
    }
}

impl fmt::Display for MetroFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /generate`.
///
/// Field order is the wire order. `metro` is only present when the form is
/// configured with the metro toggle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRequest {
    pub city: String,
    #[serde(serialize_with = "js_number::serialize")]
    pub budget: f64,
    #[serde(serialize_with = "js_number::serialize")]
    pub size: f64,
    pub intent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metro: Option<MetroFlag>,
}

impl ReportRequest {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Body returned by `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportResponse {
    pub analysis: String,
}
