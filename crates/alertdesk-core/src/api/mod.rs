//! Project API client.
//!
//! The panel never talks to HTTP directly. It goes through [`ProjectApi`],
//! which wraps an injected [`Transport`]. [`HttpTransport`] is the default
//! reqwest-backed implementation.

mod http;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::models::{DigestField, DigestSettings, Organization, Project, ProjectRef};
use crate::util::truncate_message;

pub use http::HttpTransport;

/// HTTP verbs used by the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A single request against the API root.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub data: Option<Value>,
}

impl ApiRequest {
    pub const fn new(method: Method) -> Self {
        Self { method, data: None }
    }

    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Failure of a request, whether the server rejected it or it never
/// reached the server. Both share this shape.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status, `None` for transport failures.
    pub status: Option<u16>,
    /// Decoded JSON error body, when the server sent one.
    pub body: Option<Value>,
    pub message: String,
}

impl ApiError {
    /// A failure before any HTTP status was received.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            body: None,
            message: message.into(),
        }
    }

    /// A non-success HTTP response with its raw body.
    pub fn from_response(status: u16, raw_body: &str) -> Self {
        let body = serde_json::from_str::<Value>(raw_body).ok();
        let detail = body
            .as_ref()
            .and_then(|body| body.get("detail"))
            .and_then(Value::as_str)
            .map(truncate_message);
        let message = match detail {
            Some(detail) => format!("{detail} ({status})"),
            None if raw_body.trim().is_empty() => format!("HTTP {status}"),
            None => format!("{} ({status})", truncate_message(raw_body)),
        };
        Self {
            status: Some(status),
            body,
            message,
        }
    }

    /// Field-level validation messages carried by the error body.
    pub fn field_errors(&self) -> FieldErrors {
        self.body
            .as_ref()
            .map(FieldErrors::from_body)
            .unwrap_or_default()
    }
}

/// Validation messages keyed by wire field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Decodes a server error body.
    ///
    /// Values may be a string or a list of strings (first entry wins). Any
    /// other value, or a non-object body, contributes nothing.
    pub fn from_body(body: &Value) -> Self {
        let Some(object) = body.as_object() else {
            return Self::default();
        };
        let errors = object
            .iter()
            .filter_map(|(field, value)| {
                let message = match value {
                    Value::String(message) => Some(message.clone()),
                    Value::Array(items) => items.iter().find_map(Value::as_str).map(str::to_string),
                    _ => None,
                }?;
                Some((field.clone(), message))
            })
            .collect();
        Self(errors)
    }

    pub fn get(&self, field: DigestField) -> Option<&str> {
        self.0.get(field.key()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Request transport. Implementations resolve `path` against their API root.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(&self, path: &str, request: ApiRequest) -> Result<Value, ApiError>;
}

/// Typed operations on the project resource.
#[derive(Clone)]
pub struct ProjectApi {
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for ProjectApi {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ProjectApi").finish_non_exhaustive()
    }
}

impl ProjectApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn fetch_organization(&self, slug: &str) -> Result<Organization, ApiError> {
        let path = format!("/organizations/{}/", urlencoding::encode(slug));
        let body = self
            .transport
            .request(&path, ApiRequest::new(Method::Get))
            .await?;
        decode(body, "organization")
    }

    pub async fn fetch_project(&self, project: &ProjectRef) -> Result<Project, ApiError> {
        let body = self
            .transport
            .request(&project.resource_path(), ApiRequest::new(Method::Get))
            .await?;
        decode(body, "project")
    }

    /// PUTs the full working copy and returns the values now stored.
    ///
    /// Fields the response omits (including an empty or 204 body) are taken
    /// from the sent payload.
    pub async fn save_digests(
        &self,
        project: &ProjectRef,
        settings: &DigestSettings,
    ) -> Result<DigestSettings, ApiError> {
        let data = serde_json::to_value(settings)
            .map_err(|error| ApiError::transport(format!("Failed to encode request: {error}")))?;
        tracing::debug!("Saving digest settings for {}", project);
        let body = self
            .transport
            .request(
                &project.resource_path(),
                ApiRequest::new(Method::Put).with_data(data),
            )
            .await?;
        let confirmed: DigestSettings = if body.is_null() {
            DigestSettings::default()
        } else {
            decode(body, "digest settings")?
        };
        Ok(confirmed.or(settings))
    }

    /// POST enables a plugin, DELETE disables it.
    pub async fn set_plugin_enabled(
        &self,
        project: &ProjectRef,
        plugin_id: &str,
        enable: bool,
    ) -> Result<(), ApiError> {
        let method = if enable { Method::Post } else { Method::Delete };
        tracing::debug!("{} plugin {} for {}", method, plugin_id, project);
        self.transport
            .request(&project.plugin_path(plugin_id), ApiRequest::new(method))
            .await
            .map(|_| ())
    }
}

fn decode<T: DeserializeOwned>(body: Value, what: &str) -> Result<T, ApiError> {
    serde_json::from_value(body)
        .map_err(|error| ApiError::transport(format!("Failed to parse {what} response: {error}")))
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory transport recording every request.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct RecordingTransport {
        pub requests: Mutex<Vec<(String, ApiRequest)>>,
        responses: Mutex<VecDeque<Result<Value, ApiError>>>,
    }

    impl RecordingTransport {
        pub fn respond(&self, response: Result<Value, ApiError>) {
            self.responses.lock().unwrap().push_back(response);
        }

        pub fn recorded(&self) -> Vec<(String, ApiRequest)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn request(&self, path: &str, request: ApiRequest) -> Result<Value, ApiError> {
            self.requests
                .lock()
                .unwrap()
                .push((path.to_string(), request));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(Value::Null))
        }
    }
}
