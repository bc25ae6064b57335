//! Generation parameters sent alongside the prompt.

mod thinking;

pub use thinking::ThinkingBudget;

use crate::domain::AppError;
use crate::domain::configuration::GenerationSettings;

/// Validated generation overrides.
///
/// Every field is optional; `None` leaves the service default in place and is
/// never serialized onto the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerationConfig {
    pub thinking_budget: Option<ThinkingBudget>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    /// Validate raw settings. Each field is checked independently and the first
    /// failure is returned, so no partially validated config escapes.
    pub fn from_settings(settings: &GenerationSettings) -> Result<Self, AppError> {
        let thinking_budget = match non_empty(settings.thinking.as_deref()) {
            Some(raw) => Some(raw.parse::<ThinkingBudget>()?),
            None => None,
        };

        let temperature = non_empty(settings.temperature.as_deref())
            .map(|raw| parse_float(raw).ok_or_else(|| AppError::InvalidTemperature(raw.into())))
            .transpose()?;

        let top_p = non_empty(settings.top_p.as_deref())
            .map(|raw| parse_float(raw).ok_or_else(|| AppError::InvalidTopP(raw.into())))
            .transpose()?;

        let max_output_tokens = match non_empty(settings.max_output.as_deref()) {
            Some(raw) => {
                let value = raw
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| AppError::InvalidMaxOutput(raw.into()))?;
                (value > 0).then_some(value)
            }
            None => None,
        };

        Ok(Self { thinking_budget, temperature, top_p, max_output_tokens })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// Non-finite values cannot be represented in the JSON request body.
fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}
