use crate::errors::AnalysisError;
use crate::structs::report::analysis_result::AnalysisResult;

pub struct AnalysisParser;

impl AnalysisParser {
    /// Parses a model reply into an [`AnalysisResult`].
    ///
    /// All-or-nothing: an empty reply, a missing language key, an unknown
    /// field or an unrecognised priority label rejects the whole reply.
    pub fn parse(reply: &str) -> Result<AnalysisResult, AnalysisError> {
        let trimmed = reply.trim();
        if trimmed.is_empty() {
            return Err(AnalysisError::MalformedResponse(
                "No response received from AI".to_string(),
            ));
        }

        serde_json::from_str(trimmed).map_err(|e| {
            AnalysisError::MalformedResponse(format!(
                "reply does not match the analysis schema (line {}, column {}): {}",
                e.line(),
                e.column(),
                e
            ))
        })
    }
}
