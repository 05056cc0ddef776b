//! Error types for environment loading.

use thiserror::Error;

/// Errors returned while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The env file exists but could not be read or parsed.
    #[error("failed to load env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
    /// A required variable is unset or blank.
    #[error("missing environment variable {0}")]
    MissingVar(String),
    /// A variable is set to an unusable value.
    #[error("invalid environment variable {name}: {message}")]
    InvalidVar { name: String, message: String },
}
