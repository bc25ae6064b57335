//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration
//! loading, client creation, and command execution.

use crate::adapters::HttpGeminiClient;
use crate::app::commands::review as review_command;
use crate::app::configuration::{load_review_config_from_env, require_api_key_from_env};
use crate::domain::ReviewConfig;

pub use crate::app::commands::review::{ReviewOptions, ReviewOutcome};
pub use crate::domain::AppError;

/// Run a review using configuration from the process environment.
///
/// The credential is checked before any other setting is read.
pub fn review(options: &ReviewOptions) -> Result<ReviewOutcome, AppError> {
    if !options.dry_run {
        require_api_key_from_env()?;
    }
    let config = load_review_config_from_env()?;
    review_with_config(options, &config)
}

/// Run a review with an already loaded configuration.
///
/// Dry runs only assemble the prompt and do not need a credential.
pub fn review_with_config(
    options: &ReviewOptions,
    config: &ReviewConfig,
) -> Result<ReviewOutcome, AppError> {
    if options.dry_run {
        let prompt = review_command::prepare(options, config)?;
        return Ok(ReviewOutcome { prompt, review: None });
    }

    let api_key = config.require_api_key()?;
    let client = HttpGeminiClient::new(api_key.to_string(), &config.api)?;
    review_command::execute(options, config, &client)
}
