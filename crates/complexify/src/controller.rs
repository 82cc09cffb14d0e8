//! The analysis request controller.
//!
//! Two operations make up one request's lifetime: [`submit_analysis`] starts
//! it, [`absorb_outcome`] finishes it. Both take the view state and the
//! worker handle as explicit parameters; nothing is looked up globally.
//!
//! State machine: Idle --validate ok--> Running --success--> results shown;
//! Running --failure--> error dialog. An empty input never leaves Idle.
//! Running always exits back to Idle, whichever branch is taken.

use crate::state::{AppState, MessageModal, ModalState, RunStatus};
use crate::worker::{AnalysisOutcome, AnalysisWorker};

/// Read the editor, validate, and start a request.
///
/// Whitespace-only input gets a dialog and nothing else: no UI transition,
/// no job queued. A submit while a request is already running is ignored;
/// the trigger is disabled for the duration of the call.
pub fn submit_analysis(state: &mut AppState, worker: &AnalysisWorker) {
    if state.status.is_running() {
        return;
    }

    let text = state.editor.text();
    let code = text.trim();
    if code.is_empty() {
        state.modal = ModalState::Message(MessageModal::info(
            "Nothing to analyze",
            "Enter some source code first.",
        ));
        return;
    }

    state.results.visible = false;
    state.status = RunStatus::Running;

    if !worker.submit(code.to_string()) {
        // Worker thread is gone; resolve the request on the spot through the
        // same cleanup-then-report path a failed response would take.
        tracing::error!("Analysis worker is gone; request dropped");
        state.status = RunStatus::Idle;
        state.modal = ModalState::Message(MessageModal::error("Analysis failed", FAILURE_NOTICE));
    }
}

/// Fold a worker outcome back into the view state.
///
/// The status reset comes first, unconditionally, so the loading indicator
/// is hidden and the trigger re-enabled on every exit path before either
/// branch runs.
pub fn absorb_outcome(state: &mut AppState, outcome: AnalysisOutcome) {
    state.status = RunStatus::Idle;

    match outcome {
        AnalysisOutcome::Complete(report) => {
            state.results.populate(&report);
        }
        AnalysisOutcome::Failed(detail) => {
            tracing::error!(%detail, "Analysis request failed");
            state.modal = ModalState::Message(MessageModal::error("Analysis failed", FAILURE_NOTICE));
        }
    }
}

/// One generic notice for every failure kind; the log carries the detail.
const FAILURE_NOTICE: &str =
    "Could not get results from the analysis service. Check that the backend is running and reachable.";
