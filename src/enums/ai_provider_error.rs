use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AiProviderError {
    #[error("Gemini API Error: {0}")]
    ApiError(String),
    #[error("Network Error: {0}")]
    NetworkError(String),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error("Authentication Error: {0}")]
    AuthenticationError(String),
    #[error("Request blocked by the model: {0}")]
    Blocked(String),
}
