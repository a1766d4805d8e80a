use std::fmt;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The two fixed language keys of an analysis result.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    #[default]
    Korean,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Korean];

    /// Key used for this language in the result JSON.
    pub fn key(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Korean => "korean",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Korean => "한국어",
        }
    }

    /// Spinner text shown while an analysis is pending.
    pub fn progress_message(&self) -> &'static str {
        match self {
            Language::English => "Analyzing data and generating the report...",
            Language::Korean => "데이터 분석 및 리포트 생성 중...",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Language::English => Language::Korean,
            Language::Korean => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
