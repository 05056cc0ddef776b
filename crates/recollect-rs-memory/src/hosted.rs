//! HTTP client for the hosted mem0 platform.

use crate::error::MemoryError;
use crate::model::{ChatTurn, MemoryRecord};
use crate::provider::MemoryClient;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::fmt;
use std::time::Duration;

/// Default mem0 platform endpoint.
pub const DEFAULT_HOST: &str = "https://api.mem0.ai";
/// Default transport timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

const PING_PATH: &str = "/v1/ping/";
const ADD_PATH: &str = "/v1/memories/";
const SEARCH_PATH: &str = "/v1/memories/search/";

/// Connection options for [`Mem0Client`].
#[derive(Clone)]
pub struct Mem0Options {
    /// API key sent as `Authorization: Token <key>`.
    pub api_key: String,
    /// Base URL of the service.
    pub host: String,
    /// Organization scope added to every request when set.
    pub org_id: Option<String>,
    /// Project scope added to every request when set.
    pub project_id: Option<String>,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Mem0Options {
    /// Options for the public endpoint with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: DEFAULT_HOST.to_string(),
            org_id: None,
            project_id: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the base URL.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }
}

impl fmt::Debug for Mem0Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mem0Options")
            .field("api_key", &"[REDACTED]")
            .field("host", &self.host)
            .field("org_id", &self.org_id)
            .field("project_id", &self.project_id)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Account details reported by the ping endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PingInfo {
    #[serde(default)]
    pub org_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
}

/// Memory client backed by the mem0 REST API.
#[derive(Clone)]
pub struct Mem0Client {
    http: reqwest::Client,
    host: String,
    org_id: Option<String>,
    project_id: Option<String>,
}

impl Mem0Client {
    /// Build a client without touching the network.
    pub fn new(options: Mem0Options) -> Result<Self, MemoryError> {
        let api_key = options.api_key.trim();
        if api_key.is_empty() {
            return Err(MemoryError::MissingApiKey);
        }
        let mut auth = HeaderValue::from_str(&format!("Token {api_key}"))
            .map_err(|_| MemoryError::InvalidApiKey)?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .timeout(options.timeout)
            .default_headers(headers)
            .build()?;
        let host = options.host.trim_end_matches('/').to_string();
        info!(
            "initialized mem0 client (host={}, org_set={}, project_set={})",
            host,
            options.org_id.is_some(),
            options.project_id.is_some()
        );
        Ok(Self {
            http,
            host,
            org_id: options.org_id,
            project_id: options.project_id,
        })
    }

    /// Build a client and validate its credentials against the service.
    pub async fn connect(options: Mem0Options) -> Result<Self, MemoryError> {
        let mut client = Self::new(options)?;
        client.ping().await?;
        Ok(client)
    }

    /// Check credentials and adopt the account's default scope if none was configured.
    pub async fn ping(&mut self) -> Result<PingInfo, MemoryError> {
        let response = self.http.get(self.url(PING_PATH)).send().await?;
        let info: PingInfo = serde_json::from_value(read_json(response).await?)
            .map_err(|err| MemoryError::Decode(format!("ping response: {err}")))?;
        if self.org_id.is_none() && self.project_id.is_none() {
            if let (Some(org_id), Some(project_id)) = (&info.org_id, &info.project_id) {
                self.org_id = Some(org_id.clone());
                self.project_id = Some(project_id.clone());
            }
        }
        debug!(
            "mem0 ping ok (user_email={}, org_set={}, project_set={})",
            info.user_email.as_deref().unwrap_or("unknown"),
            self.org_id.is_some(),
            self.project_id.is_some()
        );
        Ok(info)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.host, path)
    }

    /// Add the configured org/project scope to a request body.
    fn scoped(&self, mut body: Map<String, Value>) -> Value {
        if let Some(org_id) = &self.org_id {
            body.insert("org_id".to_string(), json!(org_id));
        }
        if let Some(project_id) = &self.project_id {
            body.insert("project_id".to_string(), json!(project_id));
        }
        Value::Object(body)
    }

    async fn post_json(&self, path: &str, body: Value) -> Result<Value, MemoryError> {
        let response = self.http.post(self.url(path)).json(&body).send().await?;
        read_json(response).await
    }
}

#[async_trait]
impl MemoryClient for Mem0Client {
    async fn add(&self, turns: &[ChatTurn], user_id: &str) -> Result<(), MemoryError> {
        let mut body = Map::new();
        body.insert("messages".to_string(), serde_json::to_value(turns)?);
        body.insert("user_id".to_string(), json!(user_id));
        let response = self.post_json(ADD_PATH, self.scoped(body)).await?;
        info!(
            "memories added (user_id={}, turns={}, events={})",
            user_id,
            turns.len(),
            event_count(&response)
        );
        Ok(())
    }

    async fn search(&self, query: &str, user_id: &str) -> Result<Vec<MemoryRecord>, MemoryError> {
        let mut body = Map::new();
        body.insert("query".to_string(), json!(query));
        body.insert("user_id".to_string(), json!(user_id));
        let response = self.post_json(SEARCH_PATH, self.scoped(body)).await?;
        let records = decode_records(response)?;
        info!(
            "memories searched (user_id={}, query_len={}, returned={})",
            user_id,
            query.len(),
            records.len()
        );
        Ok(records)
    }
}

/// Read a response body as JSON, turning non-success statuses into errors.
async fn read_json(response: reqwest::Response) -> Result<Value, MemoryError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(MemoryError::Api {
            status: status.as_u16(),
            body,
        });
    }
    serde_json::from_str(&body).map_err(|err| MemoryError::Decode(format!("invalid json: {err}")))
}

/// Search results arrive either as a bare array or wrapped in `results`.
fn decode_records(value: Value) -> Result<Vec<MemoryRecord>, MemoryError> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut fields) => match fields.remove("results") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(MemoryError::Decode(
                    "search response has no results array".to_string(),
                ));
            }
        },
        other => {
            return Err(MemoryError::Decode(format!(
                "search response is not a list: {other}"
            )));
        }
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            MemoryRecord::try_from(item)
                .map_err(|_| MemoryError::Decode(format!("search result {index} is not an object")))
        })
        .collect()
}

fn event_count(response: &Value) -> usize {
    match response {
        Value::Array(events) => events.len(),
        Value::Object(fields) => fields
            .get("results")
            .and_then(Value::as_array)
            .map_or(0, Vec::len),
        _ => 0,
    }
}
