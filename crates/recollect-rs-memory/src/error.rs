//! Error types for memory operations.

/// Errors returned by memory clients.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    /// No API key was supplied.
    #[error("mem0 API key not provided")]
    MissingApiKey,
    /// The API key cannot be sent as a header value.
    #[error("mem0 API key contains invalid characters")]
    InvalidApiKey,
    /// Transport-level failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("mem0 api error (status={status}): {body}")]
    Api { status: u16, body: String },
    /// Response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Serialization error.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
