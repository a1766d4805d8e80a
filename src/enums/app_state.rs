use uuid::Uuid;
use crate::structs::report::analysis_result::AnalysisResult;

/// What the application is currently showing.
///
/// Exactly one variant is live; a result and an error message can never
/// coexist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Idle,
    Analyzing {
        request_id: Uuid,
    },
    Success(AnalysisResult),
    Error(String),
}

impl AppState {
    pub fn name(&self) -> &'static str {
        match self {
            AppState::Idle => "IDLE",
            AppState::Analyzing { .. } => "ANALYZING",
            AppState::Success(_) => "SUCCESS",
            AppState::Error(_) => "ERROR",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, AppState::Idle)
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self, AppState::Analyzing { .. })
    }
}
