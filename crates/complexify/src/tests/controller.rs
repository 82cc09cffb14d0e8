//! Request lifecycle tests: validation, the one-request guarantee, verbatim
//! field mapping, failure handling, and the unconditional cleanup at the end
//! of every run.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use complexify_client::{
    AnalysisReport, AnalysisRequest, ClientError, Metric, StatusCode,
};

use crate::backend::AnalysisBackend;
use crate::controller;
use crate::state::{AppState, ModalState, RunStatus};
use crate::worker::AnalysisWorker;

#[derive(Clone, Copy)]
enum Script {
    Succeed,
    Fail,
}

/// Backend that answers from a script and records every request it sees.
struct ScriptedBackend {
    script: Script,
    delay: Duration,
    requests: Arc<Mutex<Vec<AnalysisRequest>>>,
}

impl ScriptedBackend {
    fn new(script: Script) -> (Self, Arc<Mutex<Vec<AnalysisRequest>>>) {
        Self::with_delay(script, Duration::ZERO)
    }

    fn with_delay(script: Script, delay: Duration) -> (Self, Arc<Mutex<Vec<AnalysisRequest>>>) {
        let requests = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                script,
                delay,
                requests: requests.clone(),
            },
            requests,
        )
    }
}

impl AnalysisBackend for ScriptedBackend {
    fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReport, ClientError> {
        self.requests.lock().unwrap().push(request);
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        match self.script {
            Script::Succeed => Ok(sample_report()),
            Script::Fail => Err(ClientError::Status(StatusCode::INTERNAL_SERVER_ERROR)),
        }
    }
}

fn sample_report() -> AnalysisReport {
    AnalysisReport {
        time_complexity: "O(1)".to_string(),
        space_complexity: "O(1)".to_string(),
        cyclomatic_complexity: Metric::Number(serde_json::Number::from(1)),
        readability_score: Metric::Text("A".to_string()),
        optimization_suggestions: "none".to_string(),
    }
}

fn state_with_code(code: &str) -> AppState {
    let mut state = AppState::default();
    state.editor.lines = code.split('\n').map(str::to_string).collect();
    state
}

/// Drive the UI loop's worker pump until the run finishes.
fn pump_until_idle(state: &mut AppState, worker: &AnalysisWorker) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while state.status.is_running() {
        assert!(
            Instant::now() < deadline,
            "worker never delivered an outcome"
        );
        if let Some(outcome) = worker.try_recv() {
            controller::absorb_outcome(state, outcome);
        } else {
            thread::sleep(Duration::from_millis(5));
        }
    }
}

#[test]
fn test_whitespace_only_input_is_rejected_without_a_request() {
    let (backend, requests) = ScriptedBackend::new(Script::Succeed);
    let worker = AnalysisWorker::spawn(backend);
    let mut state = state_with_code("   \n\t  ");

    controller::submit_analysis(&mut state, &worker);

    // Notice shown, but no transition: no loading, no request, results as
    // they were
    assert_eq!(state.status, RunStatus::Idle);
    assert!(!state.results.visible);
    match &state.modal {
        ModalState::Message(m) => assert!(!m.is_error),
        other => panic!("expected a message modal, got {other:?}"),
    }

    drop(worker);
    assert!(requests.lock().unwrap().is_empty());
}

#[test]
fn test_submit_issues_exactly_one_trimmed_request() {
    let (backend, requests) = ScriptedBackend::new(Script::Succeed);
    let worker = AnalysisWorker::spawn(backend);
    let mut state = state_with_code("  print(1)\n");

    controller::submit_analysis(&mut state, &worker);
    assert_eq!(state.status, RunStatus::Running);
    pump_until_idle(&mut state, &worker);

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0], AnalysisRequest::new("print(1)"));
}

#[test]
fn test_success_populates_all_fields_verbatim() {
    let (backend, _requests) = ScriptedBackend::new(Script::Succeed);
    let worker = AnalysisWorker::spawn(backend);
    let mut state = state_with_code("print(1)");

    controller::submit_analysis(&mut state, &worker);
    pump_until_idle(&mut state, &worker);

    assert!(state.results.visible);
    assert_eq!(state.results.time_complexity, "O(1)");
    assert_eq!(state.results.space_complexity, "O(1)");
    assert_eq!(state.results.cyclomatic_complexity, "1");
    assert_eq!(state.results.readability_score, "A");
    assert_eq!(state.results.optimization_suggestions, "none");

    // Cleanup ran: loading gone, trigger re-enabled, no dialog in the way
    assert_eq!(state.status, RunStatus::Idle);
    assert!(matches!(state.modal, ModalState::None));
}

#[test]
fn test_failure_shows_notice_and_reveals_nothing() {
    let (backend, _requests) = ScriptedBackend::new(Script::Fail);
    let worker = AnalysisWorker::spawn(backend);
    let mut state = state_with_code("print(1)");

    controller::submit_analysis(&mut state, &worker);
    pump_until_idle(&mut state, &worker);

    assert!(!state.results.visible);
    match &state.modal {
        ModalState::Message(m) => assert!(m.is_error),
        other => panic!("expected an error modal, got {other:?}"),
    }

    // Cleanup still ran on the failure path
    assert_eq!(state.status, RunStatus::Idle);
}

#[test]
fn test_failed_retry_does_not_resurrect_earlier_results() {
    let (backend, _requests) = ScriptedBackend::new(Script::Fail);
    let worker = AnalysisWorker::spawn(backend);
    let mut state = state_with_code("print(1)");

    // A previous run already put results on screen
    state.results.populate(&sample_report());
    assert!(state.results.visible);

    controller::submit_analysis(&mut state, &worker);
    pump_until_idle(&mut state, &worker);

    // The failed run hid them and must not bring them back
    assert!(!state.results.visible);
}

#[test]
fn test_submit_while_running_is_ignored() {
    let (backend, requests) =
        ScriptedBackend::with_delay(Script::Succeed, Duration::from_millis(100));
    let worker = AnalysisWorker::spawn(backend);
    let mut state = state_with_code("print(1)");

    controller::submit_analysis(&mut state, &worker);
    assert_eq!(state.status, RunStatus::Running);

    // Second trigger while the first is in flight
    controller::submit_analysis(&mut state, &worker);
    pump_until_idle(&mut state, &worker);

    assert_eq!(requests.lock().unwrap().len(), 1);
}
