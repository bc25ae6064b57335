//! Shared testing utilities for gemini-review CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Variables the binary reads; cleared on every invocation so the host
/// environment cannot leak into a test.
const CONFIG_VARS: &[&str] = &[
    "GEMINI_API_KEY",
    "GEMINI_API_URL",
    "MODEL",
    "MAX_OUTPUT",
    "COMMIT_TITLE",
    "COMMIT_BODY",
    "THINKING",
    "TEMPERATURE",
    "TOP_P",
    "RUST_LOG",
];

/// Path of the generateContent endpoint for the test model.
#[allow(dead_code)]
pub const GENERATE_PATH: &str = "/models/gemini-test:generateContent";

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    tmp_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let tmp_dir = root.path().join("tmp");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&tmp_dir).expect("Failed to create test tmp directory");

        Self { root, work_dir, tmp_dir }
    }

    /// Path to the directory used as the CLI's working directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary with a clean configuration.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("gemini-review").expect("Failed to locate binary");
        cmd.current_dir(self.work_dir()).env("TMPDIR", &self.tmp_dir);
        for var in CONFIG_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Build a command with a credential and model set, pointed at `api_url`.
    pub fn cli_against(&self, api_url: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("GEMINI_API_KEY", "test-key")
            .env("MODEL", "gemini-test")
            .env("GEMINI_API_URL", api_url);
        cmd
    }

    /// Write a file into the work directory and return its absolute path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let child = self.root.child("work").child(name);
        child.write_str(content).expect("Failed to write test file");
        child.path().to_path_buf()
    }

    /// Write a small diff and return its path.
    pub fn write_diff(&self) -> PathBuf {
        self.write_file("change.diff", "-let x = 1;\n+let x = 2;\n")
    }

    /// Contents of the debug prompt copy written by the last run.
    pub fn debug_prompt(&self) -> Option<String> {
        fs::read_to_string(self.tmp_dir.join("prompt.txt")).ok()
    }
}

/// A minimal successful generateContent response body.
#[allow(dead_code)]
pub fn text_response(text: &str) -> String {
    serde_json::json!({
        "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
    })
    .to_string()
}
