//! Review command: build the prompt, then dispatch it once.

mod debug_prompt;
mod dispatch;
mod prompt_builder;

use std::path::PathBuf;

use crate::domain::{AppError, ReviewConfig};
use crate::ports::GenerationClient;

pub use debug_prompt::{debug_prompt_path, write_debug_prompt};
pub use dispatch::dispatch;
pub use prompt_builder::{PromptSources, build_prompt, build_prompt_request};

/// Options for the review command.
#[derive(Debug, Clone, Default)]
pub struct ReviewOptions {
    /// Diff to review.
    pub diff_file: PathBuf,
    /// Literal instruction text.
    pub prompt: Option<String>,
    /// File containing instruction text; wins over `prompt`.
    pub prompt_file: Option<PathBuf>,
    /// Original files to include for context.
    pub context_files: Option<Vec<String>>,
    /// Assemble the prompt without calling the API.
    pub dry_run: bool,
}

/// Result of a review run.
#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    /// The prompt exactly as assembled.
    pub prompt: String,
    /// Review text; `None` for dry runs.
    pub review: Option<String>,
}

/// Build the prompt and write its debug copy.
pub fn prepare(options: &ReviewOptions, config: &ReviewConfig) -> Result<String, AppError> {
    let sources = PromptSources {
        diff_file: &options.diff_file,
        prompt: options.prompt.as_deref(),
        prompt_file: options.prompt_file.as_deref(),
        context_files: options.context_files.as_deref(),
        commit_title: &config.commit_title,
        commit_body: &config.commit_body,
    };

    let prompt = build_prompt(&sources)?;
    write_debug_prompt(&prompt);
    Ok(prompt)
}

/// Execute the review command against `client`.
///
/// Dry runs never reach this point; they stop at [`prepare`].
pub fn execute<C>(
    options: &ReviewOptions,
    config: &ReviewConfig,
    client: &C,
) -> Result<ReviewOutcome, AppError>
where
    C: GenerationClient + ?Sized,
{
    let prompt = prepare(options, config)?;
    let review = dispatch(client, &prompt, config.model.as_deref(), &config.generation)?;
    Ok(ReviewOutcome { prompt, review: Some(review) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeminiApiConfig, GenerationConfig};
    use crate::testing::FakeGenerationClient;
    use std::fs;
    use tempfile::TempDir;

    fn config() -> ReviewConfig {
        ReviewConfig {
            api_key: Some("k".into()),
            model: Some("gemini-test".into()),
            commit_title: "Add cache".into(),
            commit_body: String::new(),
            generation: GenerationConfig::default(),
            api: GeminiApiConfig::default(),
        }
    }

    fn options(dir: &TempDir) -> ReviewOptions {
        let diff = dir.path().join("change.diff");
        fs::write(&diff, "+cache.insert(k, v);").unwrap();
        ReviewOptions { diff_file: diff, ..ReviewOptions::default() }
    }

    #[test]
    fn execute_dispatches_assembled_prompt() {
        let dir = TempDir::new().unwrap();
        let client = FakeGenerationClient::new("Looks fine.");

        let outcome = execute(&options(&dir), &config(), &client).unwrap();
        assert_eq!(outcome.review.as_deref(), Some("Looks fine."));

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].prompt, outcome.prompt);
        assert!(outcome.prompt.contains("+cache.insert(k, v);"));
        assert!(outcome.prompt.starts_with("## This is commit title:\nAdd cache\n"));
    }

    #[test]
    fn prepare_matches_dispatched_prompt() {
        let dir = TempDir::new().unwrap();
        let client = FakeGenerationClient::new("ok");

        let prepared = prepare(&options(&dir), &config()).unwrap();
        let outcome = execute(&options(&dir), &config(), &client).unwrap();
        assert_eq!(prepared, outcome.prompt);
    }

    #[test]
    fn missing_diff_fails_before_dispatch() {
        let dir = TempDir::new().unwrap();
        let client = FakeGenerationClient::new("unused");
        let opts = ReviewOptions { diff_file: dir.path().join("absent.diff"), ..Default::default() };

        let err = execute(&opts, &config(), &client).unwrap_err();
        assert!(matches!(err, AppError::DiffFileNotFound { .. }));
        assert!(client.get_requests().is_empty());
    }

    #[test]
    fn remote_failure_propagates() {
        let dir = TempDir::new().unwrap();
        let client = FakeGenerationClient::failing("API key not valid.", Some(400));

        let err = execute(&options(&dir), &config(), &client).unwrap_err();
        assert!(err.to_string().contains("API key not valid."));
    }
}
