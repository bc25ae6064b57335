//! Per-invocation configuration read once at startup.

use crate::domain::configuration::{API_KEY_ENV, GeminiApiConfig};
use crate::domain::{AppError, GenerationConfig};

/// Raw generation overrides as provided by the environment, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSettings {
    pub thinking: Option<String>,
    pub temperature: Option<String>,
    pub top_p: Option<String>,
    pub max_output: Option<String>,
}

/// Validated configuration for one review run.
#[derive(Clone)]
pub struct ReviewConfig {
    /// API credential; checked by [`ReviewConfig::require_api_key`] before dispatch.
    pub api_key: Option<String>,
    /// Model identifier; checked at the dispatch boundary.
    pub model: Option<String>,
    pub commit_title: String,
    pub commit_body: String,
    pub generation: GenerationConfig,
    pub api: GeminiApiConfig,
}

impl std::fmt::Debug for ReviewConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("commit_title", &self.commit_title)
            .field("commit_body", &self.commit_body)
            .field("generation", &self.generation)
            .field("api", &self.api)
            .finish()
    }
}

impl ReviewConfig {
    /// The credential, or an error when it is missing or empty.
    pub fn require_api_key(&self) -> Result<&str, AppError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::EnvironmentVariableMissing(API_KEY_ENV.into()))
    }
}
