use uuid::Uuid;
use crate::config::constants::UNEXPECTED_ERROR_MESSAGE;
use crate::enums::app_state::AppState;
use crate::errors::AnalysisError;
use crate::services::survey_analyzer::SurveyAnalyzer;
use crate::structs::report::analysis_result::AnalysisResult;
use crate::structs::submission::Submission;

/// Single owner and writer of the application state.
///
/// ```text
/// Idle --submit--> Analyzing --settle ok--> Success --reset--> Idle
///                            --settle err-> Error   --reset--> Idle
/// ```
///
/// Only one analysis can be in flight. Outcomes are matched to the
/// submission that started them by request id.
#[derive(Debug, Default)]
pub struct AppStateMachine {
    state: AppState,
}

impl AppStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn is_analyzing(&self) -> bool {
        self.state.is_analyzing()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            AppState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            AppState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Moves Idle to Analyzing. Blank text, or any state other than Idle,
    /// makes this a no-op.
    pub fn submit(&mut self, text: &str) -> Option<Submission> {
        if !self.state.is_idle() {
            log::debug!("Submit ignored in state {}", self.state.name());
            return None;
        }
        if text.trim().is_empty() {
            log::debug!("Submit ignored: no survey text");
            return None;
        }

        let request_id = Uuid::new_v4();
        self.state = AppState::Analyzing { request_id };
        log::debug!("Analysis {} started", request_id);

        Some(Submission {
            request_id,
            text: text.to_string(),
        })
    }

    fn is_pending(&self, request_id: Uuid) -> bool {
        matches!(self.state, AppState::Analyzing { request_id: pending } if pending == request_id)
    }

    pub fn settle_ok(&mut self, request_id: Uuid, result: AnalysisResult) -> bool {
        if !self.is_pending(request_id) {
            log::warn!("⚠️ Ignoring result for stale analysis {}", request_id);
            return false;
        }
        self.state = AppState::Success(result);
        true
    }

    pub fn settle_err(&mut self, request_id: Uuid, message: &str) -> bool {
        if !self.is_pending(request_id) {
            log::warn!("⚠️ Ignoring error for stale analysis {}", request_id);
            return false;
        }
        let message = if message.trim().is_empty() {
            UNEXPECTED_ERROR_MESSAGE.to_string()
        } else {
            message.to_string()
        };
        self.state = AppState::Error(message);
        true
    }

    pub fn settle(&mut self, request_id: Uuid, outcome: Result<AnalysisResult, AnalysisError>) -> bool {
        match outcome {
            Ok(result) => self.settle_ok(request_id, result),
            Err(error) => self.settle_err(request_id, &error.to_string()),
        }
    }

    /// Success or Error back to Idle. Idle and Analyzing are left alone.
    pub fn reset(&mut self) -> bool {
        match self.state {
            AppState::Success(_) | AppState::Error(_) => {
                self.state = AppState::Idle;
                true
            }
            AppState::Idle | AppState::Analyzing { .. } => false,
        }
    }

    /// Submits `text`, awaits the analysis and settles it.
    ///
    /// Returns `None` when the submit was rejected. A task that dies
    /// without an outcome settles with the generic error message.
    pub async fn run_analysis(&mut self, text: &str, analyzer: &SurveyAnalyzer) -> Option<&AppState> {
        let submission = self.submit(text)?;

        let analyzer = analyzer.clone();
        let input = submission.text;
        let handle = tokio::spawn(async move { analyzer.analyze(&input).await });

        match handle.await {
            Ok(outcome) => {
                self.settle(submission.request_id, outcome);
            }
            Err(join_error) => {
                log::error!("❌ Analysis task failed: {}", join_error);
                self.settle_err(submission.request_id, "");
            }
        }

        Some(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::report::analyzed_section::AnalyzedSection;
    use crate::structs::report::ppt_summary::PptSummary;
    use crate::structs::report::survey_summary::SurveySummary;
    use proptest::prelude::*;

    fn empty_section() -> AnalyzedSection {
        AnalyzedSection {
            survey_summary: SurveySummary {
                overview: "o".to_string(),
                themes: vec![],
            },
            top_insights: vec![],
            pain_points: vec![],
            user_needs: vec![],
            personas: vec![],
            service_design: vec![],
            ppt_summary: PptSummary {
                title: "t".to_string(),
                bullets: vec![],
            },
        }
    }

    fn result() -> AnalysisResult {
        AnalysisResult {
            english: empty_section(),
            korean: empty_section(),
        }
    }

    #[test]
    fn starts_idle() {
        assert_eq!(AppStateMachine::new().state(), &AppState::Idle);
    }

    #[test]
    fn second_submit_while_analyzing_is_a_no_op() {
        let mut machine = AppStateMachine::new();

        let first = machine.submit("survey").unwrap();
        let state = machine.state().clone();

        assert!(machine.submit("survey").is_none());
        assert!(machine.submit("other").is_none());
        assert_eq!(machine.state(), &state);
        assert_eq!(state, AppState::Analyzing { request_id: first.request_id });
    }

    #[test]
    fn success_then_reset_clears_the_result() {
        let mut machine = AppStateMachine::new();
        let submission = machine.submit("survey").unwrap();

        assert!(machine.settle_ok(submission.request_id, result()));
        assert_eq!(machine.result(), Some(&result()));

        assert!(machine.reset());
        assert_eq!(machine.state(), &AppState::Idle);
        assert!(machine.result().is_none());
    }

    #[test]
    fn error_keeps_message_and_reset_clears_it() {
        let mut machine = AppStateMachine::new();
        let submission = machine.submit("survey").unwrap();

        machine.settle(
            submission.request_id,
            Err(AnalysisError::MalformedResponse("bad json".to_string())),
        );

        assert_eq!(
            machine.error_message(),
            Some("Malformed response from the AI service: bad json")
        );
        assert!(machine.reset());
        assert!(machine.error_message().is_none());
    }

    #[test]
    fn blank_error_message_uses_the_fallback() {
        let mut machine = AppStateMachine::new();
        let submission = machine.submit("survey").unwrap();

        machine.settle_err(submission.request_id, "  ");

        assert_eq!(machine.error_message(), Some(UNEXPECTED_ERROR_MESSAGE));
    }

    #[test]
    fn stale_outcomes_are_ignored() {
        let mut machine = AppStateMachine::new();
        let first = machine.submit("survey").unwrap();
        machine.settle_err(first.request_id, "boom");
        machine.reset();
        let second = machine.submit("survey").unwrap();

        assert!(!machine.settle_ok(first.request_id, result()));
        assert_eq!(machine.state(), &AppState::Analyzing { request_id: second.request_id });
        assert_ne!(first.request_id, second.request_id);
    }

    #[test]
    fn reset_does_not_cancel_an_analysis() {
        let mut machine = AppStateMachine::new();
        machine.submit("survey").unwrap();

        assert!(!machine.reset());
        assert!(machine.is_analyzing());
    }

    #[test]
    fn submit_is_rejected_until_reset() {
        let mut machine = AppStateMachine::new();
        let submission = machine.submit("survey").unwrap();
        machine.settle_ok(submission.request_id, result());

        assert!(machine.submit("survey").is_none());
        machine.reset();
        assert!(machine.submit("survey").is_some());
    }

    proptest! {
        #[test]
        fn whitespace_only_input_never_leaves_idle(text in "[ \t\r\n]*") {
            let mut machine = AppStateMachine::new();
            prop_assert!(machine.submit(&text).is_none());
            prop_assert_eq!(machine.state(), &AppState::Idle);
        }

        #[test]
        fn non_blank_input_enters_analyzing_once(text in "[ \t]*[a-zA-Z0-9가-힣]+[ \n]*") {
            let mut machine = AppStateMachine::new();
            let submission = machine.submit(&text);
            prop_assert!(submission.is_some());
            prop_assert!(machine.is_analyzing());
            prop_assert!(machine.submit(&text).is_none());
            prop_assert_eq!(submission.map(|s| s.text), Some(text.clone()));
        }
    }
}
