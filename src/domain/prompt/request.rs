//! Prompt request model and deterministic assembly.

use super::template::{COMMIT_BODY_HEADER, COMMIT_TITLE_HEADER, DIFF_HEADER, ORIGIN_FILES_HEADER};

/// An original (pre-change) file included for review context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextFile {
    /// Path exactly as supplied on the command line.
    pub path: String,
    /// Full file contents.
    pub content: String,
}

/// Everything needed to assemble one review prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptRequest {
    /// Diff under review, treated as an opaque blob.
    pub diff_text: String,
    /// Instruction text placed after the diff.
    pub instructions: String,
    /// Readable context files in request order.
    ///
    /// `None` means no context files were requested; `Some(vec![])` means some
    /// were requested but none could be read, which still emits the section header.
    pub context_files: Option<Vec<ContextFile>>,
    pub commit_title: String,
    pub commit_body: String,
}

impl PromptRequest {
    /// Assemble the prompt text.
    ///
    /// Section order is fixed: commit title, commit body, origin files, diff, instructions.
    pub fn assemble(&self) -> String {
        let mut prompt = String::with_capacity(
            self.diff_text.len()
                + self.instructions.len()
                + self.commit_title.len()
                + self.commit_body.len()
                + 256,
        );

        prompt.push_str(COMMIT_TITLE_HEADER);
        prompt.push('\n');
        prompt.push_str(&self.commit_title);
        prompt.push('\n');
        prompt.push_str(COMMIT_BODY_HEADER);
        prompt.push('\n');
        prompt.push_str(&self.commit_body);
        prompt.push('\n');

        if let Some(files) = &self.context_files {
            prompt.push_str(ORIGIN_FILES_HEADER);
            prompt.push('\n');
            for file in files {
                prompt.push_str(&format!(
                    "# This is original file {} before changes:\n```{}\n```",
                    file.path, file.content
                ));
            }
            prompt.push('\n');
        }

        prompt.push_str(DIFF_HEADER);
        prompt.push('\n');
        prompt.push_str("```");
        prompt.push_str(&self.diff_text);
        prompt.push_str("\n```\n");
        prompt.push_str(&self.instructions);

        prompt
    }
}
