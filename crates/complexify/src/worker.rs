//! Background worker for running analysis requests without blocking the UI.

use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

use complexify_client::{AnalysisReport, AnalysisRequest};

use crate::backend::AnalysisBackend;

/// Job sent to the background worker
#[derive(Debug)]
pub enum AnalysisJob {
    /// Analyze one piece of source code (already trimmed and non-empty)
    Analyze { code: String },
    /// Graceful shutdown
    Shutdown,
}

/// Terminal outcome of one analysis job
#[derive(Debug)]
pub enum AnalysisOutcome {
    /// The service answered with a parseable report
    Complete(AnalysisReport),
    /// The request failed; the string carries the diagnostic detail for the
    /// log, not for the user
    Failed(String),
}

/// Worker that runs analysis requests on a separate thread.
///
/// Jobs and outcomes travel over mpsc channels; the UI loop drains outcomes
/// with the non-blocking [`try_recv`](AnalysisWorker::try_recv). There is no
/// cancellation: an in-flight request runs until the transport resolves it.
pub struct AnalysisWorker {
    job_tx: Sender<AnalysisJob>,
    outcome_rx: Receiver<AnalysisOutcome>,
    thread: Option<JoinHandle<()>>,
}

impl AnalysisWorker {
    /// Spawn a worker thread driving the given backend.
    pub fn spawn<B: AnalysisBackend>(backend: B) -> Self {
        let (job_tx, job_rx) = channel();
        let (outcome_tx, outcome_rx) = channel();

        let thread = thread::spawn(move || {
            run_jobs(backend, job_rx, outcome_tx);
        });

        Self {
            job_tx,
            outcome_rx,
            thread: Some(thread),
        }
    }

    /// Hand a piece of code to the worker. Returns false if the worker
    /// thread is gone and the job could not be queued.
    pub fn submit(&self, code: String) -> bool {
        self.job_tx.send(AnalysisJob::Analyze { code }).is_ok()
    }

    /// Try to receive an outcome (non-blocking)
    pub fn try_recv(&self) -> Option<AnalysisOutcome> {
        self.outcome_rx.try_recv().ok()
    }

    /// Ask the worker thread to exit after the current job
    pub fn shutdown(&self) {
        let _ = self.job_tx.send(AnalysisJob::Shutdown);
    }
}

impl Drop for AnalysisWorker {
    fn drop(&mut self) {
        self.shutdown();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn run_jobs<B: AnalysisBackend>(
    backend: B,
    jobs: Receiver<AnalysisJob>,
    outcomes: Sender<AnalysisOutcome>,
) {
    while let Ok(job) = jobs.recv() {
        match job {
            AnalysisJob::Shutdown => break,

            AnalysisJob::Analyze { code } => {
                tracing::info!(bytes = code.len(), "Submitting analysis request");

                let outcome = match backend.analyze(AnalysisRequest::new(code)) {
                    Ok(report) => AnalysisOutcome::Complete(report),
                    Err(e) => AnalysisOutcome::Failed(e.to_string()),
                };

                let _ = outcomes.send(outcome);
            }
        }
    }
}
