//! Environment-backed configuration readers.
//!
//! This module owns all reads of process environment state. Validation of the
//! raw values lives in `domain::configuration` and `domain::generation`.

mod env_reader;

pub use env_reader::{
    load_review_config, load_review_config_from_env, require_api_key, require_api_key_from_env,
};
