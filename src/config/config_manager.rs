use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, FALLBACK_API_KEY_ENV, SUPPORTED_PROVIDERS,
};
use crate::errors::{InsightFlowError, InsightFlowResult};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# InsightFlow Configuration

# AI Configuration
[ai]
# Only "gemini" is supported
provider = "gemini"
model = "gemini-2.5-flash"
base_url = "https://generativelanguage.googleapis.com/v1beta"

# Environment variable holding your API key ($API_KEY is tried as a fallback)
api_key_env = "GEMINI_API_KEY"

# 0.0 - 2.0
temperature = 0.4

# Output Configuration
[output]
# Report language shown first: "korean" or "english"
default_language = "korean"

# Report width in columns, 0 = use the terminal width
width = 0
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the config from `path`, or from the default location when no
    /// path is given. A missing default file yields the defaults; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> InsightFlowResult<Config> {
        let (config_path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_config_path() {
                Some(path) => (path, false),
                None => return Ok(Config::default()),
            },
        };

        if !config_path.exists() {
            if explicit {
                return Err(InsightFlowError::ConfigurationFile {
                    path: config_path.display().to_string(),
                    reason: "file does not exist".to_string(),
                });
            }
            log::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", config_path.display());
        let content = fs::read_to_string(&config_path).map_err(|e| {
            InsightFlowError::ConfigurationFile {
                path: config_path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> InsightFlowResult<Config> {
        Ok(toml::from_str(content)?)
    }

    pub fn sample_config() -> &'static str {
        SAMPLE_CONFIG
    }

    pub fn create_sample_config(path: Option<&Path>) -> InsightFlowResult<PathBuf> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_config_path().ok_or_else(|| {
                InsightFlowError::config_error(
                    "could not determine the home directory",
                    None,
                    Some("pass --config <path> to choose a location"),
                )
            })?,
        };

        if config_path.exists() {
            return Err(InsightFlowError::file_error(
                &config_path.display().to_string(),
                "create",
                "a configuration file already exists",
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, SAMPLE_CONFIG)?;

        log::info!("✅ Created sample config at: {}", config_path.display());
        Ok(config_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let ai = &config.ai;

        if !SUPPORTED_PROVIDERS.contains(&ai.provider.as_str()) {
            errors.push(format!(
                "Unsupported AI provider '{}' (supported: {})",
                ai.provider,
                SUPPORTED_PROVIDERS.join(", ")
            ));
        }

        if ai.model.trim().is_empty() {
            errors.push("ai.model must not be empty".to_string());
        }

        if !(0.0..=2.0).contains(&ai.temperature) {
            errors.push(format!("ai.temperature must be between 0.0 and 2.0, got {}", ai.temperature));
        }

        if !(ai.base_url.starts_with("https://") || ai.base_url.starts_with("http://")) {
            errors.push(format!("ai.base_url must be an http(s) URL, got '{}'", ai.base_url));
        }

        if ai.api_key_env.trim().is_empty() {
            errors.push("ai.api_key_env must name an environment variable".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn resolve_api_key(ai: &AiConfig) -> Option<String> {
        Self::resolve_api_key_with(ai, |name| std::env::var(name).ok())
    }

    /// Looks up the configured variable first, then the fallback. Blank
    /// values count as absent.
    pub fn resolve_api_key_with<F>(ai: &AiConfig, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        [ai.api_key_env.as_str(), FALLBACK_API_KEY_ENV]
            .into_iter()
            .filter_map(|name| lookup(name))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
    }
}
