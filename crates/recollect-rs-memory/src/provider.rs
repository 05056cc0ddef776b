//! Memory client abstraction shared by the operations and test doubles.

use crate::error::MemoryError;
use crate::model::{ChatTurn, MemoryRecord};
use async_trait::async_trait;

#[async_trait]
/// Capabilities consumed from a memory service.
///
/// Implementations surface service errors as-is; callers decide what is
/// fatal.
pub trait MemoryClient: Send + Sync {
    /// Persist a transcript under a user identifier.
    async fn add(&self, turns: &[ChatTurn], user_id: &str) -> Result<(), MemoryError>;

    /// Search a user's memories with a natural-language query.
    ///
    /// Records come back in the order the service ranked them.
    async fn search(&self, query: &str, user_id: &str) -> Result<Vec<MemoryRecord>, MemoryError>;
}
