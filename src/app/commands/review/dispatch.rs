//! Single-shot dispatch of the assembled prompt.

use crate::domain::configuration::MODEL_ENV;
use crate::domain::{AppError, GenerationConfig, REVIEWER_PERSONA};
use crate::ports::{GenerationClient, GenerationRequest};

/// Send `prompt` to `model` once and return the review text.
///
/// A missing model is reported here, before anything is sent.
pub fn dispatch<C>(
    client: &C,
    prompt: &str,
    model: Option<&str>,
    config: &GenerationConfig,
) -> Result<String, AppError>
where
    C: GenerationClient + ?Sized,
{
    let model = model
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| AppError::EnvironmentVariableMissing(MODEL_ENV.into()))?;

    let request = GenerationRequest {
        model: model.to_string(),
        system_instruction: REVIEWER_PERSONA.to_string(),
        prompt: prompt.to_string(),
        config: *config,
    };

    tracing::debug!(
        model,
        prompt_chars = prompt.len(),
        thinking = ?config.thinking_budget.map(|budget| budget.to_string()),
        "dispatching review request"
    );

    client.generate(&request)
}
