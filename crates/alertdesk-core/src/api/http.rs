//! reqwest-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::{ApiError, ApiRequest, Method, Transport};
use crate::config::{normalize_base_url, ClientConfig};
use crate::error::{Error, Result};
use crate::util::truncate_message;

/// Sends requests to `{base_url}{path}` with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    auth_token: Option<String>,
    client: Client,
}

impl HttpTransport {
    pub fn new(
        base_url: impl AsRef<str>,
        auth_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = normalize_base_url(base_url.as_ref())?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| Error::Config(format!("Failed to construct HTTP client: {error}")))?;
        Ok(Self {
            base_url,
            auth_token,
            client,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(
            &config.api_base_url,
            config.auth_token.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Returns the base URL this transport was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, path: &str, request: ApiRequest) -> std::result::Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, &url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(data) = &request.data {
            builder = builder.json(data);
        }

        let response = builder.send().await.map_err(|error| {
            tracing::warn!("{} {} failed: {}", request.method, path, error);
            ApiError::transport(format!("Request failed: {error}"))
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| ApiError::transport(format!("Failed to read response body: {error}")))?;

        if !status.is_success() {
            tracing::warn!(
                "{} {} returned HTTP {}: {}",
                request.method,
                path,
                status.as_u16(),
                truncate_message(&body)
            );
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body)
            .map_err(|error| ApiError::transport(format!("Failed to parse response JSON: {error}")))
    }
}
