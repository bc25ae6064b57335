pub mod gemini_api;
pub mod review_config;

pub use gemini_api::GeminiApiConfig;
pub use review_config::{GenerationSettings, ReviewConfig};

/// Environment variable carrying the API credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Environment variable naming the model to call.
pub const MODEL_ENV: &str = "MODEL";
/// Environment variable overriding the maximum number of output tokens.
pub const MAX_OUTPUT_ENV: &str = "MAX_OUTPUT";
pub const COMMIT_TITLE_ENV: &str = "COMMIT_TITLE";
pub const COMMIT_BODY_ENV: &str = "COMMIT_BODY";
/// Environment variable selecting the thinking mode (`off`, `dynamic`, or a token count).
pub const THINKING_ENV: &str = "THINKING";
pub const TEMPERATURE_ENV: &str = "TEMPERATURE";
pub const TOP_P_ENV: &str = "TOP_P";
/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "GEMINI_API_URL";
