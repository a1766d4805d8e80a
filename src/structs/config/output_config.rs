use serde::{Deserialize, Serialize};
use crate::enums::language::Language;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_language: Language,

    /// Report width in columns; 0 detects the terminal width.
    #[serde(default = "ConfigHelper::default_width")]
    pub width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            width: ConfigHelper::default_width(),
        }
    }
}
