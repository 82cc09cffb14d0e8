use complexify_client::{AnalysisReport, DEFAULT_ENDPOINT};

use super::editor::EditorState;
use super::modal::ModalState;

/// Whether a request is in flight. While `Running`, the trigger is disabled
/// and the loading indicator is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunStatus {
    #[default]
    Idle,
    Running,
}

impl RunStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, RunStatus::Running)
    }
}

/// Display targets for the five report fields. Hidden until a request
/// succeeds; a failed request never partially updates it.
#[derive(Debug, Default)]
pub struct ResultsPanelState {
    pub time_complexity: String,
    pub space_complexity: String,
    pub cyclomatic_complexity: String,
    pub readability_score: String,
    pub optimization_suggestions: String,
    pub visible: bool,
}

impl ResultsPanelState {
    /// Copy each report field into its display target, verbatim, and reveal
    /// the panel.
    pub fn populate(&mut self, report: &AnalysisReport) {
        self.time_complexity = report.time_complexity.clone();
        self.space_complexity = report.space_complexity.clone();
        self.cyclomatic_complexity = report.cyclomatic_complexity.to_string();
        self.readability_score = report.readability_score.to_string();
        self.optimization_suggestions = report.optimization_suggestions.clone();
        self.visible = true;
    }
}

#[derive(Debug)]
pub struct AppState {
    /// Where requests go; shown in the header so the user knows which
    /// deployment they are talking to
    pub endpoint: String,
    pub editor: EditorState,
    pub status: RunStatus,
    pub results: ResultsPanelState,
    pub modal: ModalState,
    /// Advances while a request is running; drives the spinner
    pub spinner_tick: usize,
    pub exit: bool,
}

impl AppState {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            editor: EditorState::default(),
            status: RunStatus::default(),
            results: ResultsPanelState::default(),
            modal: ModalState::None,
            spinner_tick: 0,
            exit: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT.to_string())
    }
}
