//! Mint API client implementation.

use std::time::Duration;

use hyper::ext::ReasonPhrase;
use reqwest::{Client, Response};

use crate::mint::error::{MintError, MintResult};
use crate::mint::types::{MintRequest, MintResponse};
use crate::shared::HttpConfig;

/// Builder for configuring [`MintClient`].
#[derive(Debug, Clone)]
pub struct MintClientBuilder {
    mint_url: String,
    http: HttpConfig,
}

impl MintClientBuilder {
    /// Create a new builder with the given endpoint URL.
    pub fn new(mint_url: impl Into<String>) -> Self {
        Self {
            mint_url: mint_url.into().trim_end_matches('/').to_string(),
            http: HttpConfig::default(),
        }
    }

    /// Set the request timeout. By default requests never time out.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.http.timeout = Some(timeout);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.http.default_headers.push((name.into(), value.into()));
        self
    }

    /// Build the client.
    pub fn build(self) -> MintResult<MintClient> {
        Ok(MintClient {
            http_client: self.http.build_client()?,
            mint_url: self.mint_url,
        })
    }
}

/// Client for the mint endpoint.
#[derive(Debug, Clone)]
pub struct MintClient {
    http_client: Client,
    mint_url: String,
}

impl MintClient {
    /// Create a new client with default settings.
    pub fn new(mint_url: impl Into<String>) -> MintResult<Self> {
        MintClientBuilder::new(mint_url).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(mint_url: impl Into<String>) -> MintClientBuilder {
        MintClientBuilder::new(mint_url)
    }

    /// Get the endpoint URL.
    pub fn mint_url(&self) -> &str {
        &self.mint_url
    }

    /// Submit a signed mint request.
    ///
    /// The request is sent exactly once. Any non-2xx status is returned as
    /// [`MintError::RequestFailed`] with the status code and the server's
    /// reason phrase.
    pub async fn submit(&self, request: &MintRequest) -> MintResult<MintResponse> {
        tracing::debug!(address = %request.address, url = %self.mint_url, "Submitting mint request");

        let response = self
            .http_client
            .post(&self.mint_url)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MintError::RequestFailed {
                status: status.as_u16(),
                status_text: status_text(&response),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| MintError::Deserialize(e.to_string()))
    }
}

/// Reason phrase from the status line.
///
/// hyper only records the phrase when it differs from the canonical one, so
/// the canonical phrase is used otherwise.
fn status_text(response: &Response) -> String {
    match response.extensions().get::<ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or("")
            .to_string(),
    }
}
