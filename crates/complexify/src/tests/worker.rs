//! Worker plumbing tests.

use std::time::{Duration, Instant};

use complexify_client::{AnalysisReport, AnalysisRequest, ClientError, Metric};

use crate::backend::AnalysisBackend;
use crate::worker::{AnalysisOutcome, AnalysisWorker};

struct EchoBackend;

impl AnalysisBackend for EchoBackend {
    fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReport, ClientError> {
        Ok(AnalysisReport {
            time_complexity: request.code,
            space_complexity: String::new(),
            cyclomatic_complexity: Metric::Number(serde_json::Number::from(0)),
            readability_score: Metric::Number(serde_json::Number::from(0)),
            optimization_suggestions: String::new(),
        })
    }
}

fn recv_with_deadline(worker: &AnalysisWorker) -> AnalysisOutcome {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(outcome) = worker.try_recv() {
            return outcome;
        }
        assert!(Instant::now() < deadline, "no outcome before the deadline");
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn test_worker_runs_jobs_in_order() {
    let worker = AnalysisWorker::spawn(EchoBackend);

    assert!(worker.submit("first".to_string()));
    assert!(worker.submit("second".to_string()));

    match recv_with_deadline(&worker) {
        AnalysisOutcome::Complete(report) => assert_eq!(report.time_complexity, "first"),
        other => panic!("expected a completed report, got {other:?}"),
    }
    match recv_with_deadline(&worker) {
        AnalysisOutcome::Complete(report) => assert_eq!(report.time_complexity, "second"),
        other => panic!("expected a completed report, got {other:?}"),
    }
}

#[test]
fn test_worker_shuts_down_cleanly_on_drop() {
    let worker = AnalysisWorker::spawn(EchoBackend);
    assert!(worker.submit("bye".to_string()));
    // Drop joins the thread; the test passes by not hanging
    drop(worker);
}
