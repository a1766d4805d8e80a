use serde::{Deserialize, Serialize};

/// Content for a single presentation slide.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PptSummary {
    pub title: String,
    pub bullets: Vec<String>,
}
