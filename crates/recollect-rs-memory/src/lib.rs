//! Memory model and client support for Recollect.

pub mod error;
pub mod hosted;
pub mod model;
pub mod provider;

/// Memory error type.
pub use error::MemoryError;
/// Hosted mem0 client and its options.
pub use hosted::{DEFAULT_HOST, DEFAULT_TIMEOUT, Mem0Client, Mem0Options, PingInfo};
/// Transcript and record models.
pub use model::{ChatTurn, MemoryRecord, Role};
/// Memory client interface.
pub use provider::MemoryClient;
