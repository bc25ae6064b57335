//! Text-generation client port definition.

use crate::domain::{AppError, GenerationConfig};

/// One text-generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Model identifier (e.g. "gemini-2.5-pro").
    pub model: String,
    /// System instruction setting the model's persona.
    pub system_instruction: String,
    /// The assembled prompt.
    pub prompt: String,
    /// Validated generation overrides.
    pub config: GenerationConfig,
}

/// Port for text-generation API operations.
pub trait GenerationClient {
    /// Issue a single request and return the generated text.
    fn generate(&self, request: &GenerationRequest) -> Result<String, AppError>;
}
