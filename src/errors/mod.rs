use thiserror::Error;

/// Failures of a single survey analysis round trip.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Configuration missing: no API key found in ${env_var}")]
    MissingCredential { env_var: String },

    #[error("Remote analysis failed: {0}")]
    RemoteFailure(String),

    #[error("Malformed response from the AI service: {0}")]
    MalformedResponse(String),
}

impl AnalysisError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential { .. } => "MissingCredential",
            Self::RemoteFailure(_) => "RemoteFailure",
            Self::MalformedResponse(_) => "MalformedResponse",
        }
    }
}

#[derive(Debug, Error)]
pub enum InsightFlowError {
    #[error("Configuration Error: {message}")]
    Configuration {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },

    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFile { path: String, reason: String },

    #[error("Unsupported file '{file_name}': only .csv and .txt files can be analyzed")]
    UnsupportedFile { file_name: String },

    #[error("File operation '{operation}' failed for '{file_path}': {reason}")]
    FileOperation {
        file_path: String,
        operation: String,
        reason: String,
    },

    #[error("Parse error in {content_type}: {reason}")]
    Parse { content_type: String, reason: String },

    #[error("No survey text to analyze")]
    EmptyInput,

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InsightFlowError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperation {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration { field, suggestion, .. } => {
                let mut msg = self.to_string();
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFile { .. } => {
                format!("{}\n💡 Check file permissions and TOML syntax", self)
            }
            Self::UnsupportedFile { .. } => {
                format!("{}\n💡 Export the survey as CSV or plain text", self)
            }
            Self::FileOperation { .. } => {
                format!("{}\n💡 Check file permissions and path", self)
            }
            Self::Parse { .. } => {
                format!("{}\n💡 Check the format and syntax of the input", self)
            }
            Self::EmptyInput => {
                format!("{}\n💡 Pass --file <survey.csv>, --text \"...\" or pipe the survey on stdin", self)
            }
            Self::AnalysisFailed(_) => {
                format!("{}\n💡 Check your API key and internet connection, then run the analysis again", self)
            }
            Self::Io(_) => self.to_string(),
        }
    }
}

pub type InsightFlowResult<T> = Result<T, InsightFlowError>;

impl From<serde_json::Error> for InsightFlowError {
    fn from(error: serde_json::Error) -> Self {
        InsightFlowError::Parse {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for InsightFlowError {
    fn from(error: toml::de::Error) -> Self {
        InsightFlowError::Parse {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: &InsightFlowError) {
        log::debug!("{:?}", error);
        eprintln!("❌ {}", error.user_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_reads_as_configuration_problem() {
        let error = AnalysisError::MissingCredential {
            env_var: "GEMINI_API_KEY".to_string(),
        };

        assert!(error.to_string().starts_with("Configuration missing"));
        assert_eq!(error.kind(), "MissingCredential");
    }

    #[test]
    fn failed_analysis_keeps_the_state_message() {
        let message = AnalysisError::RemoteFailure("HTTP 500".to_string()).to_string();
        let error = InsightFlowError::AnalysisFailed(message);

        assert_eq!(error.to_string(), "Analysis failed: Remote analysis failed: HTTP 500");
        assert!(error.user_message().contains("internet connection"));
    }

    #[test]
    fn configuration_message_lists_field_and_suggestion() {
        let error = InsightFlowError::config_error("bad value", Some("ai.model"), Some("set a model"));
        let message = error.user_message();

        assert!(message.contains("(field: ai.model)"));
        assert!(message.contains("Suggestion: set a model"));
    }
}
