//! Reads review inputs from disk and assembles the prompt.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, ContextFile, DEFAULT_INSTRUCTIONS, PromptRequest};

/// File and text inputs for one prompt.
#[derive(Debug, Clone, Copy)]
pub struct PromptSources<'a> {
    pub diff_file: &'a Path,
    pub prompt: Option<&'a str>,
    pub prompt_file: Option<&'a Path>,
    pub context_files: Option<&'a [String]>,
    pub commit_title: &'a str,
    pub commit_body: &'a str,
}

/// Read every input and build the prompt text.
pub fn build_prompt(sources: &PromptSources<'_>) -> Result<String, AppError> {
    Ok(build_prompt_request(sources)?.assemble())
}

/// Read every input into a [`PromptRequest`].
///
/// A missing diff or explicit prompt file is fatal. A missing context file is
/// skipped with a warning.
pub fn build_prompt_request(sources: &PromptSources<'_>) -> Result<PromptRequest, AppError> {
    let instructions = resolve_instructions(sources.prompt, sources.prompt_file)?;

    let diff_text = fs::read_to_string(sources.diff_file).map_err(|e| {
        AppError::DiffFileNotFound {
            path: sources.diff_file.display().to_string(),
            details: e.to_string(),
        }
    })?;

    let context_files = sources
        .context_files
        .filter(|paths| !paths.is_empty())
        .map(read_context_files);

    Ok(PromptRequest {
        diff_text,
        instructions,
        context_files,
        commit_title: sources.commit_title.to_string(),
        commit_body: sources.commit_body.to_string(),
    })
}

/// Prompt file wins over literal text; empty values count as absent.
fn resolve_instructions(
    prompt: Option<&str>,
    prompt_file: Option<&Path>,
) -> Result<String, AppError> {
    if let Some(path) = prompt_file.filter(|p| !p.as_os_str().is_empty()) {
        return fs::read_to_string(path).map_err(|e| AppError::PromptFileNotFound {
            path: path.display().to_string(),
            details: e.to_string(),
        });
    }

    match prompt.filter(|p| !p.is_empty()) {
        Some(text) => Ok(text.to_string()),
        None => Ok(DEFAULT_INSTRUCTIONS.to_string()),
    }
}

fn read_context_files(paths: &[String]) -> Vec<ContextFile> {
    paths
        .iter()
        .filter_map(|path| match fs::read_to_string(path) {
            Ok(content) => Some(ContextFile { path: path.clone(), content }),
            Err(e) => {
                eprintln!("Warning: Context file {} could not be read. Skipping. ({})", path, e);
                None
            }
        })
        .collect()
}
