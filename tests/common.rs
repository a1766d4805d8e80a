use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use insightflow::enums::ai_provider_error::AiProviderError;
use insightflow::services::survey_analyzer::SurveyAnalyzer;
use insightflow::traits::ai_provider::AiProvider;
use serde_json::{json, Value};

/// Provider returning canned replies in order and counting calls.
pub struct FakeProvider {
    replies: Mutex<Vec<Result<String, AiProviderError>>>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn new(replies: Vec<Result<String, AiProviderError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for FakeProvider {
    async fn generate_structured(
        &self,
        _api_key: &str,
        prompt: &str,
        _schema: &Value,
    ) -> Result<String, AiProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(AiProviderError::ApiError("no canned reply left".to_string()));
        }
        replies.remove(0)
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

pub fn analyzer(provider: &Arc<FakeProvider>) -> SurveyAnalyzer {
    SurveyAnalyzer::new(provider.clone(), Some("test-key".to_string()), "GEMINI_API_KEY")
}

pub fn section(tag: &str) -> Value {
    json!({
        "surveySummary": {
            "overview": format!("{} overview", tag),
            "themes": [format!("{} speed", tag), format!("{} trust", tag), format!("{} price", tag)]
        },
        "topInsights": (1..=5).map(|i| format!("{} insight {}", tag, i)).collect::<Vec<_>>(),
        "painPoints": [
            {"category": format!("{} checkout", tag), "points": ["too many steps", "card rejected"]},
            {"category": format!("{} delivery", tag), "points": ["late"]}
        ],
        "userNeeds": (1..=5).map(|i| format!("{} need {}", tag, i)).collect::<Vec<_>>(),
        "personas": [
            {"name": format!("{} commuter", tag), "goals": "save time", "behavior": "orders on the train",
             "painPoints": "spotty signal", "needs": "offline cart"},
            {"name": format!("{} planner", tag), "goals": "budget", "behavior": "compares prices",
             "painPoints": "hidden fees", "needs": "clear totals"}
        ],
        "serviceDesign": [
            {"feature": format!("{} one-tap pay", tag), "description": "store cards", "priority": "Must"},
            {"feature": format!("{} live tracking", tag), "description": "map view", "priority": "Should"},
            {"feature": format!("{} themes", tag), "description": "dark mode", "priority": "Could"}
        ],
        "pptSummary": {"title": format!("{} findings", tag), "bullets": ["speed matters", "trust matters"]}
    })
}

pub fn conforming_reply() -> String {
    json!({"english": section("en"), "korean": section("ko")}).to_string()
}
