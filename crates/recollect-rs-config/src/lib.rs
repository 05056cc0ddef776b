//! Environment bootstrap and typed settings.
//!
//! Credentials live in the process environment, optionally seeded from a
//! local `.env` file before any client is built.

mod error;
mod loader;
mod model;

/// Public error type returned by settings loading.
pub use error::ConfigError;
/// Env file bootstrap.
pub use loader::{DEFAULT_ENV_FILE, load_env_file};
/// Settings models and the variables they read.
pub use model::*;
