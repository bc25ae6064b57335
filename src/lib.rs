//! gemini-review: assemble a code-review prompt from a diff and ask Gemini to review it.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{ReviewOptions, ReviewOutcome, review, review_with_config};
pub use domain::AppError;
