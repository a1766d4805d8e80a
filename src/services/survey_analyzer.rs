use std::sync::Arc;
use crate::enums::ai_provider_error::AiProviderError;
use crate::errors::AnalysisError;
use crate::helpers::schema_builder::analysis_schema;
use crate::prompts::survey_analysis_prompt::build_survey_prompt;
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::analysis_parser::AnalysisParser;
use crate::config::config_manager::ConfigManager;
use crate::structs::config::ai_config::AiConfig;
use crate::structs::report::analysis_result::AnalysisResult;
use crate::traits::ai_provider::AiProvider;

/// Turns raw survey text into a bilingual [`AnalysisResult`] with a single
/// request to the configured [`AiProvider`].
#[derive(Clone)]
pub struct SurveyAnalyzer {
    provider: Arc<dyn AiProvider>,
    api_key: Option<String>,
    api_key_env: String,
}

impl SurveyAnalyzer {
    pub fn new(provider: Arc<dyn AiProvider>, api_key: Option<String>, api_key_env: impl Into<String>) -> Self {
        Self {
            provider,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            api_key_env: api_key_env.into(),
        }
    }

    /// Gemini-backed analyzer with the key taken from the environment.
    pub fn from_config(config: &AiConfig) -> Self {
        Self::new(
            Arc::new(GeminiProvider::from_config(config)),
            ConfigManager::resolve_api_key(config),
            config.api_key_env.clone(),
        )
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub async fn analyze(&self, raw_text: &str) -> Result<AnalysisResult, AnalysisError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| AnalysisError::MissingCredential {
            env_var: self.api_key_env.clone(),
        })?;

        let prompt = build_survey_prompt(raw_text);
        let schema = analysis_schema();

        log::info!(
            "🔍 Sending {} characters of survey data to {}",
            raw_text.chars().count(),
            self.provider.name()
        );

        let reply = self
            .provider
            .generate_structured(api_key, &prompt, &schema)
            .await
            .map_err(|e| {
                log::error!("❌ Analysis request failed: {}", e);
                Self::remote_failure(e)
            })?;

        let result = AnalysisParser::parse(&reply).map_err(|e| {
            log::error!("❌ {}", e);
            e
        })?;

        for warning in result.quality_warnings() {
            log::warn!("⚠️ Report content: {}", warning);
        }

        log::info!("✅ Analysis complete");
        Ok(result)
    }

    fn remote_failure(error: AiProviderError) -> AnalysisError {
        AnalysisError::RemoteFailure(error.to_string())
    }
}
