//! Transcript and record models exchanged with memory clients.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Speaker of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One role-tagged message of a conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Who said it.
    pub role: Role,
    /// What was said.
    pub content: String,
}

impl ChatTurn {
    /// Build a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Build an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Record returned by a memory search.
///
/// The service owns the schema, so the record is kept as an opaque JSON
/// object and fields are read by key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryRecord(Map<String, Value>);

impl MemoryRecord {
    /// Look up a field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl TryFrom<Value> for MemoryRecord {
    type Error = Value;

    /// Accept JSON objects, hand back anything else.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(other),
        }
    }
}
