//! Error taxonomy for one analysis exchange.

use thiserror::Error;

/// Everything that can go wrong between sending a request and holding a
/// parsed report.
///
/// Input validation (empty code) is not represented here: callers check that
/// before a request exists, so the client never sees it.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or no response arrived (connection
    /// refused, DNS failure, broken transport).
    #[error("failed to reach the analysis service: {0}")]
    Transport(#[source] reqwest::Error),

    /// A response arrived but its status was not a success. The body is
    /// ignored regardless of content.
    #[error("analysis service returned {0}")]
    Status(reqwest::StatusCode),

    /// A success response arrived but the body did not parse as a report.
    #[error("failed to decode the analysis response: {0}")]
    Decode(#[source] reqwest::Error),
}
