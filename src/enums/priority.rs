use std::fmt;
use serde::{Deserialize, Serialize};
use crate::enums::language::Language;

/// MoSCoW priority attached to a proposed feature.
///
/// The set is closed: a reply carrying any other label fails to deserialize.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Priority {
    Must,
    Should,
    Could,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Must, Priority::Should, Priority::Could];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Must => "Must",
            Priority::Should => "Should",
            Priority::Could => "Could",
        }
    }

    /// Badge text shown next to a feature in the report.
    pub fn badge(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::English, _) => self.as_str(),
            (Language::Korean, Priority::Must) => "필수 (Must)",
            (Language::Korean, Priority::Should) => "권장 (Should)",
            (Language::Korean, Priority::Could) => "고려 (Could)",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_exactly() {
        for priority in Priority::ALL {
            let json = serde_json::to_string(&priority).unwrap();
            assert_eq!(json, format!("\"{}\"", priority.as_str()));
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!(serde_json::from_str::<Priority>("\"Won't\"").is_err());
        assert!(serde_json::from_str::<Priority>("\"must\"").is_err());
    }

    #[test]
    fn korean_badges_keep_the_english_label() {
        assert_eq!(Priority::Should.badge(Language::Korean), "권장 (Should)");
        assert_eq!(Priority::Could.badge(Language::English), "Could");
    }
}
