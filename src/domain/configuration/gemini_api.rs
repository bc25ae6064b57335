//! Gemini API endpoint configuration.

use url::Url;

use crate::domain::AppError;

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiApiConfig {
    /// Base URL; the model path is appended per request.
    pub api_url: Url,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url() }
    }
}

impl GeminiApiConfig {
    /// Build from an optional base URL override.
    pub fn from_override(api_url: Option<&str>) -> Result<Self, AppError> {
        match api_url.filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => {
                let api_url = Url::parse(raw.trim()).map_err(|e| {
                    AppError::config_error(format!("Invalid API URL '{}': {}", raw, e))
                })?;
                Ok(Self { api_url })
            }
            None => Ok(Self::default()),
        }
    }

    /// Endpoint for `generateContent` on the given model.
    ///
    /// Bare model names are placed under `models/`; resource names such as
    /// `models/x` or `tunedModels/y` are used verbatim.
    pub fn generate_content_url(&self, model: &str) -> Result<Url, AppError> {
        let resource = if model.contains('/') {
            model.to_string()
        } else {
            format!("models/{}", model)
        };
        let base = self.api_url.as_str().trim_end_matches('/');

        Url::parse(&format!("{}/{}:generateContent", base, resource)).map_err(|e| {
            AppError::config_error(format!("Invalid model identifier '{}': {}", model, e))
        })
    }
}

fn default_api_url() -> Url {
    Url::parse(DEFAULT_API_URL).expect("Default API URL must be valid")
}
