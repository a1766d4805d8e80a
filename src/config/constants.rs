pub const CONFIG_DIR_NAME: &str = ".insightflow";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Checked when the configured variable is unset.
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";
pub const SUPPORTED_PROVIDERS: &[&str] = &["gemini"];
pub const RESPONSE_MIME_TYPE: &str = "application/json";

pub const SUPPORTED_INPUT_EXTENSIONS: &[&str] = &["csv", "txt"];

pub const DEFAULT_REPORT_WIDTH: usize = 0;
pub const FALLBACK_REPORT_WIDTH: usize = 80;
pub const MIN_REPORT_WIDTH: usize = 40;
pub const MAX_REPORT_WIDTH: usize = 120;

pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

pub const MIN_THEMES: usize = 3;
pub const MAX_THEMES: usize = 5;
pub const TOP_INSIGHT_COUNT: usize = 5;
pub const MIN_USER_NEEDS: usize = 5;
pub const MIN_PERSONAS: usize = 2;
pub const MAX_PERSONAS: usize = 3;
