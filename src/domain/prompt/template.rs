//! Fixed prompt text shipped with the binary.

/// System instruction sent with every generation request.
pub const REVIEWER_PERSONA: &str =
    "You are a code review assistant. You are helping to review code changes in a pull request.";

/// Instruction text used when neither `--prompt-file` nor `--prompt` is supplied.
pub const DEFAULT_INSTRUCTIONS: &str = r#"
Instructions:
##
Review the attached code and find bugs and issues in the code. Attached diff for review and original files.
Added lines are marked with "+" and removed lines are marked with "-". Lines that are not changed are not marked.
Suggest improvements for the change in the file.
Write exact lines of files that need to be changed. Don't explain the purpose of the original file.
Do not suggest descriptive variable name.
Write output in markdown format.
##
"#;

pub(crate) const COMMIT_TITLE_HEADER: &str = "## This is commit title:";
pub(crate) const COMMIT_BODY_HEADER: &str = "## This is commit body:";
pub(crate) const ORIGIN_FILES_HEADER: &str = "## These are origin files before changes:";
pub(crate) const DIFF_HEADER: &str = "## These are changes diff for the code:";
