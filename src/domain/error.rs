use thiserror::Error;

/// Library-wide error type for gemini-review operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required environment variable is missing or empty.
    #[error("{0} environment variable is not set")]
    EnvironmentVariableMissing(String),

    /// Diff file could not be found or read.
    #[error("Diff file not found at {path}: {details}")]
    DiffFileNotFound { path: String, details: String },

    /// Explicit prompt file could not be found or read.
    #[error("Prompt file not found at {path}: {details}")]
    PromptFileNotFound { path: String, details: String },

    /// Thinking mode is not `off`, `dynamic`, or a non-negative integer.
    #[error("Invalid thinking mode: {0}. Must be 'off', 'dynamic', or a number.")]
    InvalidThinkingMode(String),

    /// Temperature value is not a float.
    #[error("Invalid temperature value: {0}. Must be a float number.")]
    InvalidTemperature(String),

    /// Top-p value is not a float.
    #[error("Invalid top_p value: {0}. Must be a float number.")]
    InvalidTopP(String),

    /// Max output override is not a non-negative integer.
    #[error("Invalid max length value: {0}. Must be an integer.")]
    InvalidMaxOutput(String),

    /// Gemini API request failed.
    #[error("Gemini API error{}: {message}", status_suffix(.status))]
    GeminiApiError { message: String, status: Option<u16> },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" ({})", code)).unwrap_or_default()
}
