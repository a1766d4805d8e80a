use serde::{Deserialize, Serialize};

/// A research persona synthesised from recurring patterns in the survey.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserPersona {
    /// Archetype label, e.g. "The Busy Professional".
    pub name: String,
    pub goals: String,
    pub behavior: String,
    pub pain_points: String,
    pub needs: String,
}
