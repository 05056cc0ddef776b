use async_trait::async_trait;
use parking_lot::Mutex;
use recollect_rs_memory::{ChatTurn, MemoryClient, MemoryError, MemoryRecord};
use serde_json::Value;

/// Build a record from a JSON object literal.
///
/// Panics if `value` is not an object.
pub fn record(value: Value) -> MemoryRecord {
    MemoryRecord::try_from(value).expect("record must be a JSON object")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCall {
    pub turns: Vec<ChatTurn>,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCall {
    pub query: String,
    pub user_id: String,
}

/// Client that records every call and answers searches with canned records.
#[derive(Default)]
pub struct RecordingMemory {
    search_records: Vec<MemoryRecord>,
    adds: Mutex<Vec<AddCall>>,
    searches: Mutex<Vec<SearchCall>>,
}

impl RecordingMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(search_records: Vec<MemoryRecord>) -> Self {
        Self {
            search_records,
            ..Self::default()
        }
    }

    pub fn adds(&self) -> Vec<AddCall> {
        self.adds.lock().clone()
    }

    pub fn searches(&self) -> Vec<SearchCall> {
        self.searches.lock().clone()
    }
}

#[async_trait]
impl MemoryClient for RecordingMemory {
    async fn add(&self, turns: &[ChatTurn], user_id: &str) -> Result<(), MemoryError> {
        self.adds.lock().push(AddCall {
            turns: turns.to_vec(),
            user_id: user_id.to_string(),
        });
        Ok(())
    }

    async fn search(&self, query: &str, user_id: &str) -> Result<Vec<MemoryRecord>, MemoryError> {
        self.searches.lock().push(SearchCall {
            query: query.to_string(),
            user_id: user_id.to_string(),
        });
        Ok(self.search_records.clone())
    }
}

/// Client whose every call fails with the given API status.
#[derive(Debug, Clone)]
pub struct FailingMemory {
    status: u16,
    body: String,
}

impl FailingMemory {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    fn error(&self) -> MemoryError {
        MemoryError::Api {
            status: self.status,
            body: self.body.clone(),
        }
    }
}

#[async_trait]
impl MemoryClient for FailingMemory {
    async fn add(&self, _turns: &[ChatTurn], _user_id: &str) -> Result<(), MemoryError> {
        Err(self.error())
    }

    async fn search(
        &self,
        _query: &str,
        _user_id: &str,
    ) -> Result<Vec<MemoryRecord>, MemoryError> {
        Err(self.error())
    }
}
