//! HTTP client for the analyze endpoint.

use crate::error::ClientError;
use crate::protocol::{AnalysisReport, AnalysisRequest};

/// Deployment default for a locally running analysis backend.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/analyze";

/// Client for the analysis service. Cheap to clone; the underlying
/// `reqwest::Client` pools connections internally.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnalysisClient {
    /// Create a client against the given endpoint URL. The URL is validated
    /// lazily: a malformed endpoint surfaces as a transport error on the
    /// first `analyze` call.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit one piece of source code for analysis.
    ///
    /// Issues exactly one POST with a JSON body and no retries. The status is
    /// checked before the body is touched, so a non-success response maps to
    /// `ClientError::Status` even when its body is unparseable garbage. No
    /// timeout is applied; the call runs until the transport resolves it.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, ClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        response
            .json::<AnalysisReport>()
            .await
            .map_err(ClientError::Decode)
    }
}
