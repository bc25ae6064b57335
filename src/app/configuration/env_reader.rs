//! Review configuration loading from environment variables.

use crate::domain::configuration::{
    API_KEY_ENV, API_URL_ENV, COMMIT_BODY_ENV, COMMIT_TITLE_ENV, MAX_OUTPUT_ENV, MODEL_ENV,
    TEMPERATURE_ENV, THINKING_ENV, TOP_P_ENV,
};
use crate::domain::{AppError, GeminiApiConfig, GenerationConfig, GenerationSettings, ReviewConfig};

/// Load and validate the review configuration from the process environment.
pub fn load_review_config_from_env() -> Result<ReviewConfig, AppError> {
    load_review_config(|key| std::env::var(key).ok())
}

/// Read the credential from the process environment.
pub fn require_api_key_from_env() -> Result<String, AppError> {
    require_api_key(|key| std::env::var(key).ok())
}

/// The credential, or an error when it is unset or empty.
pub fn require_api_key<F>(lookup: F) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(API_KEY_ENV)
        .filter(|key| !key.is_empty())
        .ok_or_else(|| AppError::EnvironmentVariableMissing(API_KEY_ENV.into()))
}

/// Load and validate the review configuration through an arbitrary variable lookup.
///
/// Every generation override is validated here, so a config that loads
/// successfully never carries a malformed value into dispatch.
pub fn load_review_config<F>(lookup: F) -> Result<ReviewConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let settings = GenerationSettings {
        thinking: lookup(THINKING_ENV),
        temperature: lookup(TEMPERATURE_ENV),
        top_p: lookup(TOP_P_ENV),
        max_output: lookup(MAX_OUTPUT_ENV),
    };
    let generation = GenerationConfig::from_settings(&settings)?;
    let api = GeminiApiConfig::from_override(lookup(API_URL_ENV).as_deref())?;

    Ok(ReviewConfig {
        api_key: lookup(API_KEY_ENV),
        model: lookup(MODEL_ENV),
        commit_title: lookup(COMMIT_TITLE_ENV).unwrap_or_default(),
        commit_body: lookup(COMMIT_BODY_ENV).unwrap_or_default(),
        generation,
        api,
    })
}
