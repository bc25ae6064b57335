//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, ReviewOptions};

#[derive(Parser, Debug)]
#[command(name = "gemini-review")]
#[command(version)]
#[command(about = "Review a code diff with the Gemini API", long_about = None)]
struct Cli {
    /// Path to the diff file
    #[arg(long)]
    diff_file: PathBuf,
    /// The prompt for code review
    #[arg(long, allow_hyphen_values = true)]
    prompt: Option<String>,
    /// Path to a file containing the prompt (takes priority over --prompt)
    #[arg(long)]
    prompt_file: Option<PathBuf>,
    /// Comma-separated list of paths to context files
    #[arg(long)]
    context_files: Option<String>,
    /// Print the assembled prompt instead of calling the API
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn into_options(self) -> ReviewOptions {
        ReviewOptions {
            diff_file: self.diff_file,
            prompt: self.prompt,
            prompt_file: self.prompt_file,
            context_files: split_context_files(self.context_files.as_deref()),
            dry_run: self.dry_run,
        }
    }
}

/// Split the comma-separated list verbatim. An empty list means none requested.
fn split_context_files(raw: Option<&str>) -> Option<Vec<String>> {
    raw.filter(|list| !list.is_empty()).map(|list| list.split(',').map(str::to_string).collect())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing();

    match api::review(&cli.into_options()) {
        Ok(outcome) => match outcome.review {
            Some(review) => println!("{}", review),
            None => println!("{}", outcome.prompt),
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
