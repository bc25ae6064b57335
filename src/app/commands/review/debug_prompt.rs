//! Best-effort copy of the assembled prompt for post-hoc inspection.

use std::fs;
use std::path::PathBuf;

const DEBUG_PROMPT_FILE: &str = "prompt.txt";

/// Fixed location of the debug prompt copy (`/tmp/prompt.txt` on most Unix systems).
pub fn debug_prompt_path() -> PathBuf {
    std::env::temp_dir().join(DEBUG_PROMPT_FILE)
}

/// Write `prompt` to the debug location. Failures are logged and otherwise ignored.
pub fn write_debug_prompt(prompt: &str) {
    let path = debug_prompt_path();
    match fs::write(&path, prompt) {
        Ok(()) => tracing::debug!(path = %path.display(), "wrote debug prompt"),
        Err(e) => tracing::debug!(path = %path.display(), error = %e, "could not write debug prompt"),
    }
}
