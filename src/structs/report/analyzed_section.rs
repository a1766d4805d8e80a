use serde::{Deserialize, Serialize};
use crate::config::constants::{
    MAX_PERSONAS, MAX_THEMES, MIN_PERSONAS, MIN_THEMES, MIN_USER_NEEDS, TOP_INSIGHT_COUNT,
};
use crate::structs::report::pain_point_category::PainPointCategory;
use crate::structs::report::ppt_summary::PptSummary;
use crate::structs::report::service_design_insight::ServiceDesignInsight;
use crate::structs::report::survey_summary::SurveySummary;
use crate::structs::report::user_persona::UserPersona;

/// One language's rendition of the full report.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnalyzedSection {
    pub survey_summary: SurveySummary,
    pub top_insights: Vec<String>,
    pub pain_points: Vec<PainPointCategory>,
    pub user_needs: Vec<String>,
    pub personas: Vec<UserPersona>,
    pub service_design: Vec<ServiceDesignInsight>,
    pub ppt_summary: PptSummary,
}

impl AnalyzedSection {
    /// Count shortfalls against what the model was asked to produce.
    /// These never invalidate a parsed section.
    pub fn quality_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let themes = self.survey_summary.themes.len();
        if !(MIN_THEMES..=MAX_THEMES).contains(&themes) {
            warnings.push(format!(
                "expected {}-{} themes, got {}",
                MIN_THEMES, MAX_THEMES, themes
            ));
        }

        if self.top_insights.len() != TOP_INSIGHT_COUNT {
            warnings.push(format!(
                "expected {} top insights, got {}",
                TOP_INSIGHT_COUNT,
                self.top_insights.len()
            ));
        }

        if self.user_needs.len() < MIN_USER_NEEDS {
            warnings.push(format!(
                "expected at least {} user needs, got {}",
                MIN_USER_NEEDS,
                self.user_needs.len()
            ));
        }

        let personas = self.personas.len();
        if !(MIN_PERSONAS..=MAX_PERSONAS).contains(&personas) {
            warnings.push(format!(
                "expected {}-{} personas, got {}",
                MIN_PERSONAS, MAX_PERSONAS, personas
            ));
        }

        if self.ppt_summary.bullets.is_empty() {
            warnings.push("slide summary has no bullets".to_string());
        }

        warnings
    }
}
