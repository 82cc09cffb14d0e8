//! Terminal client for the Complexify code-analysis service.
//!
//! The user pastes or types source code into an editor pane and triggers an
//! analysis; the code is POSTed to a remote service and the returned metrics
//! (complexities, readability, suggestions) are rendered into a results
//! panel. The request runs on a background worker thread so the UI stays
//! responsive while the call is in flight.

pub mod app;
pub mod backend;
pub mod components;
pub mod controller;
pub mod logging;
pub mod modals;
pub mod state;
pub mod worker;

#[cfg(test)]
mod tests;

pub use app::App;
pub use backend::RemoteBackend;
pub use logging::init_logging;
pub use worker::AnalysisWorker;
