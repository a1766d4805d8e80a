use crate::config::constants::{DEFAULT_API_KEY_ENV, DEFAULT_REPORT_WIDTH, GEMINI_BASE_URL};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_provider() -> String {
        "gemini".to_string()
    }

    pub fn default_model() -> String {
        "gemini-2.5-flash".to_string()
    }

    pub fn default_base_url() -> String {
        GEMINI_BASE_URL.to_string()
    }

    pub fn default_api_key_env() -> String {
        DEFAULT_API_KEY_ENV.to_string()
    }

    pub fn default_temperature() -> f32 {
        0.4
    }

    pub fn default_width() -> usize {
        DEFAULT_REPORT_WIDTH
    }
}
