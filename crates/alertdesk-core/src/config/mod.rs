//! Client configuration.
//!
//! Provides `ClientConfig`, which tells the desktop shell which API root to
//! talk to and which organization/project's alert settings to open.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::ProjectRef;
use crate::util::{has_http_scheme, non_blank};

pub const ENV_API_URL: &str = "ALERTDESK_API_URL";
pub const ENV_AUTH_TOKEN: &str = "ALERTDESK_AUTH_TOKEN";
pub const ENV_ORGANIZATION: &str = "ALERTDESK_ORG";
pub const ENV_PROJECT: &str = "ALERTDESK_PROJECT";
pub const ENV_TIMEOUT_SECS: &str = "ALERTDESK_TIMEOUT_SECS";
pub const ENV_LOCALE_FILE: &str = "ALERTDESK_LOCALE_FILE";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

const fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// API root, e.g. `https://alerts.example.com/api/0`
    pub api_base_url: String,
    /// Bearer token sent with every request, if any
    #[serde(default)]
    pub auth_token: Option<String>,
    /// Organization slug
    pub organization: String,
    /// Project slug
    pub project: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    /// Reads configuration from `ALERTDESK_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            non_blank(lookup(key))
                .ok_or_else(|| Error::Config(format!("{key} is required")))
        };

        let request_timeout_secs = match non_blank(lookup(ENV_TIMEOUT_SECS)) {
            Some(raw) => raw.parse::<u64>().map_err(|error| {
                Error::Config(format!("{ENV_TIMEOUT_SECS} must be a whole number: {error}"))
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Self {
            api_base_url: required(ENV_API_URL)?,
            auth_token: non_blank(lookup(ENV_AUTH_TOKEN)),
            organization: required(ENV_ORGANIZATION)?,
            project: required(ENV_PROJECT)?,
            request_timeout_secs,
        }
        .validated()
    }

    /// Parses a JSON config document.
    pub fn from_json(payload: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(payload)
            .map_err(|error| Error::Config(format!("invalid config JSON: {error}")))?;
        config.validated()
    }

    pub fn project_ref(&self) -> ProjectRef {
        ProjectRef::new(&self.organization, &self.project)
    }

    fn validated(self) -> Result<Self> {
        let api_base_url = normalize_base_url(&self.api_base_url)?;
        let organization = non_blank(Some(self.organization))
            .ok_or_else(|| Error::Config("organization must not be empty".to_string()))?;
        let project = non_blank(Some(self.project))
            .ok_or_else(|| Error::Config("project must not be empty".to_string()))?;
        if self.request_timeout_secs == 0 {
            return Err(Error::Config(
                "request timeout must be at least one second".to_string(),
            ));
        }

        Ok(Self {
            api_base_url,
            auth_token: non_blank(self.auth_token),
            organization,
            project,
            request_timeout_secs: self.request_timeout_secs,
        })
    }
}

/// Trims whitespace and trailing slashes; requires an http(s) scheme.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::Config("API base URL must not be empty".to_string()));
    }
    if !has_http_scheme(&base) {
        return Err(Error::Config(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn from_lookup_reads_all_fields() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_API_URL, "https://alerts.example.com/api/0/"),
            (ENV_AUTH_TOKEN, " token "),
            (ENV_ORGANIZATION, "acme"),
            (ENV_PROJECT, "frontend"),
            (ENV_TIMEOUT_SECS, "30"),
        ]))
        .unwrap();

        assert_eq!(
            config,
            ClientConfig {
                api_base_url: "https://alerts.example.com/api/0".to_string(),
                auth_token: Some("token".to_string()),
                organization: "acme".to_string(),
                project: "frontend".to_string(),
                request_timeout_secs: 30,
            }
        );
        assert_eq!(config.project_ref(), ProjectRef::new("acme", "frontend"));
    }

    #[test]
    fn from_lookup_requires_project() {
        let error = ClientConfig::from_lookup(lookup(&[
            (ENV_API_URL, "https://alerts.example.com/api/0"),
            (ENV_ORGANIZATION, "acme"),
        ]))
        .unwrap_err();
        assert!(error.to_string().contains(ENV_PROJECT));
    }

    #[test]
    fn from_lookup_rejects_bad_timeout() {
        let error = ClientConfig::from_lookup(lookup(&[
            (ENV_API_URL, "https://alerts.example.com/api/0"),
            (ENV_ORGANIZATION, "acme"),
            (ENV_PROJECT, "frontend"),
            (ENV_TIMEOUT_SECS, "soon"),
        ]))
        .unwrap_err();
        assert!(error.to_string().contains(ENV_TIMEOUT_SECS));
    }

    #[test]
    fn from_json_applies_default_timeout() {
        let config = ClientConfig::from_json(
            r#"{"api_base_url": "http://localhost:9000/api/0", "organization": "acme", "project": "frontend"}"#,
        )
        .unwrap();
        assert_eq!(config.request_timeout_secs, 15);
        assert_eq!(config.auth_token, None);
    }

    #[test]
    fn from_json_rejects_unknown_fields() {
        let error = ClientConfig::from_json(
            r#"{"api_base_url": "http://localhost", "organization": "acme", "project": "p", "extra": 1}"#,
        )
        .unwrap_err();
        assert!(error.to_string().contains("unknown field"));
    }

    #[test]
    fn normalize_base_url_rejects_invalid_values() {
        assert!(normalize_base_url("").is_err());
        assert!(normalize_base_url("example.com").is_err());
        assert_eq!(
            normalize_base_url("https://api.example.com/").unwrap(),
            "https://api.example.com"
        );
    }
}
