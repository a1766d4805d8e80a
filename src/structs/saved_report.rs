use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::structs::report::analysis_result::AnalysisResult;

/// A result written by `analyze --save`, readable by `render`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SavedReport {
    pub generated_at: DateTime<Utc>,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    pub result: AnalysisResult,
}

impl SavedReport {
    pub fn new(model: &str, source_file: Option<&str>, result: AnalysisResult) -> Self {
        Self {
            generated_at: Utc::now(),
            model: model.to_string(),
            source_file: source_file.map(|s| s.to_string()),
            result,
        }
    }
}
