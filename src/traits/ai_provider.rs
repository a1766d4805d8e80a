use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde_json::Value;
use crate::enums::ai_provider_error::AiProviderError;

/// A remote model that can answer a prompt with JSON conforming to a schema.
///
/// Implementations make exactly one request per call and return the raw
/// reply text, which may be empty when the model produced nothing.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {
    async fn generate_structured(
        &self,
        api_key: &str,
        prompt: &str,
        schema: &Value,
    ) -> Result<String, AiProviderError>;

    fn name(&self) -> &'static str;
}
