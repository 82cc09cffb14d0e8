//! Wire types for the analysis exchange.
//!
//! The report fields are opaque: the service decides what a readability score
//! or a suggestion looks like, and the client carries the values through to
//! display without interpreting them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Request body for the analyze endpoint.
///
/// `code` is expected to be already trimmed; callers validate non-emptiness
/// before constructing a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub code: String,
}

impl AnalysisRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Response body from the analyze endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub time_complexity: String,
    pub space_complexity: String,
    pub cyclomatic_complexity: Metric,
    pub readability_score: Metric,
    pub optimization_suggestions: String,
}

/// A metric value that the service may report as either a JSON number or a
/// JSON string.
///
/// The `Display` impl renders the value exactly as it appeared on the wire:
/// numbers without trailing decoration (`1` stays `1`, `2.5` stays `2.5`),
/// strings without quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metric {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Number(n) => write!(f, "{n}"),
            Metric::Text(s) => f.write_str(s),
        }
    }
}
