//! Storing a transcript for a user.

use crate::DEFAULT_USER_ID;
use crate::error::OperationError;
use log::info;
use recollect_rs_memory::{ChatTurn, MemoryClient};

/// Transcript to store and the user it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRequest {
    pub user_id: String,
    pub turns: Vec<ChatTurn>,
}

impl AddRequest {
    pub fn new(user_id: impl Into<String>, turns: Vec<ChatTurn>) -> Self {
        Self {
            user_id: user_id.into(),
            turns,
        }
    }

    /// The sample transcript stored under `user_id`.
    pub fn sample_for(user_id: impl Into<String>) -> Self {
        Self::new(user_id, sample_transcript())
    }
}

impl Default for AddRequest {
    fn default() -> Self {
        Self::sample_for(DEFAULT_USER_ID)
    }
}

/// Five-turn conversation used by the demo, oldest turn first.
pub fn sample_transcript() -> Vec<ChatTurn> {
    vec![
        ChatTurn::user("my fiance / lover name is Karthika."),
        ChatTurn::assistant("Ho great nice name , your fiance is lucky to have you."),
        ChatTurn::user("I think so too."),
        ChatTurn::assistant("What is your favorite song by them?"),
        ChatTurn::user("Nee Singam Dhan."),
    ]
}

/// Submit the request's transcript to the memory service.
pub async fn add_memory(
    client: &dyn MemoryClient,
    request: &AddRequest,
) -> Result<(), OperationError> {
    info!(
        "adding memories (user_id={}, turns={})",
        request.user_id,
        request.turns.len()
    );
    client.add(&request.turns, &request.user_id).await?;
    Ok(())
}
