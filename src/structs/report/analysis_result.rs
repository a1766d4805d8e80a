use serde::{Deserialize, Serialize};
use crate::enums::language::Language;
use crate::structs::report::analyzed_section::AnalyzedSection;

/// The bilingual report returned by the remote model.
///
/// Both languages share the [`AnalyzedSection`] type, so the two renditions
/// are structurally identical by construction. A reply missing either key
/// fails to deserialize.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AnalysisResult {
    pub english: AnalyzedSection,
    pub korean: AnalyzedSection,
}

impl AnalysisResult {
    pub fn section(&self, language: Language) -> &AnalyzedSection {
        match language {
            Language::English => &self.english,
            Language::Korean => &self.korean,
        }
    }

    pub fn quality_warnings(&self) -> Vec<String> {
        Language::ALL
            .iter()
            .flat_map(|language| {
                self.section(*language)
                    .quality_warnings()
                    .into_iter()
                    .map(move |warning| format!("[{}] {}", language.key(), warning))
            })
            .collect()
    }
}
