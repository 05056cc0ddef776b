//! Settings read from the process environment.

use crate::ConfigError;
use recollect_rs_memory::{DEFAULT_HOST, DEFAULT_TIMEOUT, Mem0Options};
use std::fmt;
use std::time::Duration;

/// API key for the hosted service.
pub const API_KEY_VAR: &str = "MEM0_API_KEY";
/// Base URL override.
pub const HOST_VAR: &str = "MEM0_HOST";
/// Organization scope.
pub const ORG_ID_VAR: &str = "MEM0_ORG_ID";
/// Project scope.
pub const PROJECT_ID_VAR: &str = "MEM0_PROJECT_ID";
/// Transport timeout in whole seconds.
pub const TIMEOUT_VAR: &str = "MEM0_TIMEOUT_SECS";

/// Connection settings for the memory service.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_key: String,
    pub host: String,
    pub org_id: Option<String>,
    pub project_id: Option<String>,
    pub timeout: Duration,
}

impl ClientSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through a lookup function.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key =
            read(API_KEY_VAR).ok_or_else(|| ConfigError::MissingVar(API_KEY_VAR.to_string()))?;
        let timeout = match read(TIMEOUT_VAR) {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|err| ConfigError::InvalidVar {
                    name: TIMEOUT_VAR.to_string(),
                    message: format!("expected whole seconds, got {raw:?} ({err})"),
                })?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            api_key,
            host: read(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            org_id: read(ORG_ID_VAR),
            project_id: read(PROJECT_ID_VAR),
            timeout,
        })
    }

    /// Options for building the hosted client.
    pub fn client_options(&self) -> Mem0Options {
        Mem0Options {
            api_key: self.api_key.clone(),
            host: self.host.clone(),
            org_id: self.org_id.clone(),
            project_id: self.project_id.clone(),
            timeout: self.timeout,
        }
    }
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("api_key", &"[REDACTED]")
            .field("host", &self.host)
            .field("org_id", &self.org_id)
            .field("project_id", &self.project_id)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let settings =
            ClientSettings::from_lookup(lookup(&[(API_KEY_VAR, "m0-key")])).expect("settings");
        assert_eq!(settings.api_key, "m0-key");
        assert_eq!(settings.host, DEFAULT_HOST);
        assert_eq!(settings.org_id, None);
        assert_eq!(settings.project_id, None);
        assert_eq!(settings.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn missing_or_blank_key_is_rejected() {
        let err = ClientSettings::from_lookup(lookup(&[])).expect_err("missing");
        assert!(matches!(err, ConfigError::MissingVar(ref name) if name == API_KEY_VAR));

        let err =
            ClientSettings::from_lookup(lookup(&[(API_KEY_VAR, "   ")])).expect_err("blank");
        assert!(matches!(err, ConfigError::MissingVar(_)));
    }

    #[test]
    fn overrides_flow_into_client_options() {
        let settings = ClientSettings::from_lookup(lookup(&[
            (API_KEY_VAR, "m0-key"),
            (HOST_VAR, "http://localhost:8888"),
            (ORG_ID_VAR, "org-1"),
            (PROJECT_ID_VAR, "proj-1"),
            (TIMEOUT_VAR, "15"),
        ]))
        .expect("settings");
        let options = settings.client_options();
        assert_eq!(options.host, "http://localhost:8888");
        assert_eq!(options.org_id.as_deref(), Some("org-1"));
        assert_eq!(options.project_id.as_deref(), Some("proj-1"));
        assert_eq!(options.timeout, Duration::from_secs(15));
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let err =
            ClientSettings::from_lookup(lookup(&[(API_KEY_VAR, "k"), (TIMEOUT_VAR, "soon")]))
                .expect_err("invalid");
        let ConfigError::InvalidVar { name, .. } = err else {
            panic!("expected invalid var");
        };
        assert_eq!(name, TIMEOUT_VAR);
    }

    #[test]
    fn debug_output_hides_api_key() {
        let settings =
            ClientSettings::from_lookup(lookup(&[(API_KEY_VAR, "m0-secret")])).expect("settings");
        assert!(!format!("{settings:?}").contains("m0-secret"));
    }
}
