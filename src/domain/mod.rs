pub mod configuration;
pub mod error;
pub mod generation;
pub mod prompt;

pub use configuration::{GeminiApiConfig, GenerationSettings, ReviewConfig};
pub use error::AppError;
pub use generation::{GenerationConfig, ThinkingBudget};
pub use prompt::{ContextFile, DEFAULT_INSTRUCTIONS, PromptRequest, REVIEWER_PERSONA};
