//! Errors surfaced by the memory operations.

use recollect_rs_memory::MemoryError;
use thiserror::Error;

/// Errors returned by [`crate::add_memory`] and [`crate::query_memory`].
#[derive(Debug, Error)]
pub enum OperationError {
    /// The memory service call failed.
    #[error("memory service error: {0}")]
    Memory(#[from] MemoryError),
    /// A search result lacks a field that is projected.
    #[error("memory record {index} is missing key {field:?}")]
    MissingField { index: usize, field: &'static str },
    /// Rendering the projected memories failed.
    #[error("failed to encode memories: {0}")]
    Encode(#[from] serde_json::Error),
    /// Writing the rendered output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
