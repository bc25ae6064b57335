pub mod request;
pub mod template;

pub use request::{ContextFile, PromptRequest};
pub use template::{DEFAULT_INSTRUCTIONS, REVIEWER_PERSONA};
