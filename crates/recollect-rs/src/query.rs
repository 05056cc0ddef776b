//! Searching a user's memories and rendering them as JSON.

use crate::DEFAULT_USER_ID;
use crate::error::OperationError;
use crate::render::to_json_string;
use log::{debug, info};
use recollect_rs_memory::{MemoryClient, MemoryRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Write;

/// Query text sent by default.
///
/// The `{user_name}` placeholder is sent as-is unless
/// [`QueryMode::Interpolated`] is selected.
pub const QUERY_TEMPLATE: &str = "What are {user_name}'s preferences?";

const USER_NAME_PLACEHOLDER: &str = "{user_name}";
const MEMORY_KEY: &str = "memory";
const UPDATED_AT_KEY: &str = "updated_at";

/// How the query text is built from [`QUERY_TEMPLATE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryMode {
    /// Send the template verbatim.
    #[default]
    Literal,
    /// Replace `{user_name}` with the user id.
    Interpolated,
}

/// Search to run and the user it is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub user_id: String,
    pub query: String,
}

impl QueryRequest {
    pub fn new(user_id: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            query: query.into(),
        }
    }

    /// Build the templated query for `user_id`.
    pub fn for_user(user_id: impl Into<String>, mode: QueryMode) -> Self {
        let user_id = user_id.into();
        let query = match mode {
            QueryMode::Literal => QUERY_TEMPLATE.to_string(),
            QueryMode::Interpolated => QUERY_TEMPLATE.replace(USER_NAME_PLACEHOLDER, &user_id),
        };
        Self { user_id, query }
    }
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self::for_user(DEFAULT_USER_ID, QueryMode::Literal)
    }
}

/// The two fields kept from each search result.
///
/// Values are copied through exactly as the service returned them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedMemory {
    pub memory: Value,
    pub updated_at: Value,
}

/// Project every record, in order.
///
/// Fails on the first record that lacks a field; nothing is skipped.
pub fn project(records: &[MemoryRecord]) -> Result<Vec<ProjectedMemory>, OperationError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            Ok(ProjectedMemory {
                memory: required(index, record, MEMORY_KEY)?.clone(),
                updated_at: required(index, record, UPDATED_AT_KEY)?.clone(),
            })
        })
        .collect()
}

fn required<'a>(
    index: usize,
    record: &'a MemoryRecord,
    field: &'static str,
) -> Result<&'a Value, OperationError> {
    record
        .get(field)
        .ok_or(OperationError::MissingField { index, field })
}

/// Search, project and render without producing any output.
async fn render_query(
    client: &dyn MemoryClient,
    request: &QueryRequest,
) -> Result<String, OperationError> {
    info!(
        "querying memories (user_id={}, query_len={})",
        request.user_id,
        request.query.len()
    );
    let records = client.search(&request.query, &request.user_id).await?;
    let memories = project(&records)?;
    let rendered = to_json_string(&memories)?;
    debug!(
        "memories rendered (count={}, bytes={})",
        memories.len(),
        rendered.len()
    );
    Ok(rendered)
}

/// Run the query and print the JSON array to stdout.
pub async fn query_memory(
    client: &dyn MemoryClient,
    request: &QueryRequest,
) -> Result<String, OperationError> {
    query_memory_to(client, request, &mut std::io::stdout()).await
}

/// Run the query and write the JSON array, plus a newline, to `out`.
///
/// Nothing is written when the search or projection fails.
pub async fn query_memory_to<W>(
    client: &dyn MemoryClient,
    request: &QueryRequest,
    out: &mut W,
) -> Result<String, OperationError>
where
    W: Write + ?Sized,
{
    let rendered = render_query(client, request).await?;
    writeln!(out, "{rendered}")?;
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::{ProjectedMemory, QUERY_TEMPLATE, QueryMode, QueryRequest, project};
    use crate::OperationError;
    use pretty_assertions::assert_eq;
    use recollect_rs_memory::MemoryRecord;
    use serde_json::json;

    fn record(value: serde_json::Value) -> MemoryRecord {
        MemoryRecord::try_from(value).expect("object")
    }

    #[test]
    fn literal_mode_keeps_placeholder() {
        let request = QueryRequest::default();
        assert_eq!(request.user_id, "Vikas");
        assert_eq!(request.query, "What are {user_name}'s preferences?");
        assert_eq!(request.query, QUERY_TEMPLATE);
    }

    #[test]
    fn interpolated_mode_substitutes_user() {
        let request = QueryRequest::for_user("Vikas", QueryMode::Interpolated);
        assert_eq!(request.query, "What are Vikas's preferences?");
    }

    #[test]
    fn project_drops_extra_fields_and_keeps_order() {
        let records = vec![
            record(json!({ "memory": "b", "updated_at": "2024-01-02T00:00:00Z", "score": 0.3 })),
            record(json!({ "memory": "a", "updated_at": null, "id": "x" })),
        ];
        let projected = project(&records).expect("project");
        assert_eq!(
            projected,
            vec![
                ProjectedMemory {
                    memory: json!("b"),
                    updated_at: json!("2024-01-02T00:00:00Z"),
                },
                ProjectedMemory {
                    memory: json!("a"),
                    updated_at: json!(null),
                },
            ]
        );
    }

    #[test]
    fn project_copies_non_string_values_unchanged() {
        let records = vec![record(json!({ "memory": ["a", 1], "updated_at": 1704067200 }))];
        let projected = project(&records).expect("project");
        assert_eq!(projected[0].memory, json!(["a", 1]));
        assert_eq!(projected[0].updated_at, json!(1704067200));
    }

    #[test]
    fn project_fails_on_missing_key() {
        let records = vec![
            record(json!({ "memory": "ok", "updated_at": "t" })),
            record(json!({ "memory": "no timestamp" })),
        ];
        let err = project(&records).expect_err("missing");
        assert_eq!(
            err.to_string(),
            "memory record 1 is missing key \"updated_at\""
        );
        let OperationError::MissingField { index, field } = err else {
            panic!("expected missing field");
        };
        assert_eq!((index, field), (1, "updated_at"));
    }
}
