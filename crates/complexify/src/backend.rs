//! Bridge between the worker thread and the async HTTP client.

use complexify_client::{AnalysisClient, AnalysisReport, AnalysisRequest, ClientError};

/// Something that can turn an analysis request into a report.
///
/// The worker is generic over this so tests can script the outcome without a
/// network in sight.
pub trait AnalysisBackend: Send + 'static {
    fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReport, ClientError>;
}

/// Production backend: drives `AnalysisClient` on its own tokio runtime.
///
/// The worker thread is plain `std::thread`, so the async call is resolved
/// here with `block_on` at the edge. The network call is the only suspension
/// point in a request's lifetime.
pub struct RemoteBackend {
    runtime: tokio::runtime::Runtime,
    client: AnalysisClient,
}

impl RemoteBackend {
    pub fn new(endpoint: impl Into<String>) -> std::io::Result<Self> {
        Ok(Self {
            runtime: tokio::runtime::Runtime::new()?,
            client: AnalysisClient::new(endpoint),
        })
    }
}

impl AnalysisBackend for RemoteBackend {
    fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReport, ClientError> {
        self.runtime.block_on(self.client.analyze(&request))
    }
}
