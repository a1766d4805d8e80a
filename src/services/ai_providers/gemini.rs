use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use crate::config::constants::RESPONSE_MIME_TYPE;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::ai::gemini::gemini_response::{GeminiErrorEnvelope, GeminiResponse};
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct GeminiProvider {
    base_url: String,
    client: Client,
    model: String,
    temperature: Option<f32>,
}

impl GeminiProvider {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            model,
            temperature: None,
        }
    }

    pub fn from_config(config: &AiConfig) -> Self {
        Self::new(config.base_url.clone(), config.model.clone()).with_temperature(config.temperature)
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    pub fn build_request(&self, prompt: &str, schema: &Value) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent::user(prompt)],
            generation_config: GeminiGenerationConfig {
                temperature: self.temperature,
                candidate_count: Some(1),
                response_mime_type: RESPONSE_MIME_TYPE.to_string(),
                response_schema: schema.clone(),
            },
        }
    }

    /// Maps a non-success status and its body to a provider error.
    pub fn status_error(status: StatusCode, body: &str) -> AiProviderError {
        let detail = serde_json::from_str::<GeminiErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .ok()
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| body.trim().to_string());

        match status.as_u16() {
            400 => AiProviderError::ApiError(format!("Bad request: {}", detail)),
            401 | 403 => AiProviderError::AuthenticationError(detail),
            429 => AiProviderError::ApiError(format!("Rate limit exceeded: {}", detail)),
            _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, detail)),
        }
    }

    /// Pulls the reply text out of a successful `generateContent` body.
    ///
    /// A prompt blocked before generation is an error; a candidate without
    /// text comes back as an empty string for the caller to judge.
    pub fn extract_reply(body: &str) -> Result<String, AiProviderError> {
        let response: GeminiResponse = serde_json::from_str(body)
            .map_err(|e| AiProviderError::SerializationError(format!("Failed to parse Gemini response: {}", e)))?;

        if let Some(reason) = response.block_reason() {
            if response.candidates.is_empty() {
                return Err(AiProviderError::Blocked(reason.to_string()));
            }
        }

        if let Some(candidate) = response.candidates.first() {
            if let Some(reason) = candidate.finish_reason.as_deref() {
                if reason != "STOP" {
                    log::warn!("⚠️ Gemini finished with reason {}", reason);
                }
            }
        }

        Ok(response.first_text().unwrap_or_default())
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn generate_structured(
        &self,
        api_key: &str,
        prompt: &str,
        schema: &Value,
    ) -> Result<String, AiProviderError> {
        log::info!("📦 Request model: {}", self.model);

        let request_body = self.build_request(prompt, schema);
        log::debug!("Gemini request: {}", serde_json::to_string(&request_body).unwrap_or_default());

        let response = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            log::error!("❌ Gemini API Error Response: {}", body);
            return Err(Self::status_error(status, &body));
        }

        Self::extract_reply(&body)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn endpoint_joins_base_url_and_model() {
        let provider = GeminiProvider::new("https://example.test/v1beta/".to_string(), "gemini-2.5-flash".to_string());
        assert_eq!(provider.endpoint(), "https://example.test/v1beta/models/gemini-2.5-flash:generateContent");
    }

    #[test]
    fn request_carries_prompt_schema_and_json_mime_type() {
        let provider = GeminiProvider::new("https://example.test".to_string(), "m".to_string()).with_temperature(0.2);
        let schema = json!({"type": "OBJECT"});

        let body = serde_json::to_value(provider.build_request("analyze this", &schema)).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "analyze this");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"], schema);
        assert_eq!(body["generationConfig"]["candidateCount"], 1);
    }

    #[test]
    fn reply_text_is_joined_across_parts() {
        let body = json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "{\"a\":"}, {"text": "1}"}]},
                "finishReason": "STOP"
            }]
        })
        .to_string();

        assert_eq!(GeminiProvider::extract_reply(&body).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn missing_candidates_yield_empty_text() {
        assert_eq!(GeminiProvider::extract_reply("{}").unwrap(), "");
    }

    #[test]
    fn blocked_prompt_is_an_error() {
        let body = json!({"promptFeedback": {"blockReason": "SAFETY"}}).to_string();

        assert_eq!(
            GeminiProvider::extract_reply(&body).unwrap_err(),
            AiProviderError::Blocked("SAFETY".to_string())
        );
    }

    #[test]
    fn non_json_body_is_a_serialization_error() {
        assert!(matches!(
            GeminiProvider::extract_reply("<html>"),
            Err(AiProviderError::SerializationError(_))
        ));
    }

    #[test]
    fn status_codes_map_to_provider_errors() {
        let body = json!({"error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}}).to_string();

        assert_eq!(
            GeminiProvider::status_error(StatusCode::FORBIDDEN, &body),
            AiProviderError::AuthenticationError("API key not valid".to_string())
        );
        assert_eq!(
            GeminiProvider::status_error(StatusCode::TOO_MANY_REQUESTS, "slow down"),
            AiProviderError::ApiError("Rate limit exceeded: slow down".to_string())
        );
        assert!(matches!(
            GeminiProvider::status_error(StatusCode::INTERNAL_SERVER_ERROR, ""),
            AiProviderError::ApiError(msg) if msg.starts_with("HTTP 500")
        ));
    }
}
