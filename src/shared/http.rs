//! HTTP client construction shared by the RPC and mint clients.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use thiserror::Error;

/// Errors raised while building an HTTP client.
#[derive(Debug, Error)]
pub enum HttpConfigError {
    #[error("Invalid header name '{name}': {reason}")]
    InvalidHeaderName { name: String, reason: String },

    #[error("Invalid header value for '{name}': {reason}")]
    InvalidHeaderValue { name: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Settings common to every HTTP client in the crate.
///
/// No timeout is applied unless one is set explicitly.
#[derive(Debug, Clone, Default)]
pub struct HttpConfig {
    pub timeout: Option<Duration>,
    pub default_headers: Vec<(String, String)>,
}

impl HttpConfig {
    /// Build a `reqwest::Client` sending and accepting JSON.
    pub fn build_client(&self) -> Result<Client, HttpConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        for (name, value) in &self.default_headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                HttpConfigError::InvalidHeaderName {
                    name: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                HttpConfigError::InvalidHeaderValue {
                    name: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            headers.insert(header_name, header_value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }
}
