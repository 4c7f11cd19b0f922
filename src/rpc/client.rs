//! Sui JSON-RPC client implementation.
//!
//! The [`SuiRpcClient`] wraps a single `reqwest::Client` and is shared,
//! read-only, across all wallets in a batch.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::keys::SuiAddress;
use crate::rpc::error::{RpcError, RpcResult};
use crate::rpc::types::{Balance, JsonRpcRequest, JsonRpcResponse};
use crate::shared::HttpConfig;

/// Builder for configuring [`SuiRpcClient`].
#[derive(Debug, Clone)]
pub struct SuiRpcClientBuilder {
    rpc_url: String,
    http: HttpConfig,
}

impl SuiRpcClientBuilder {
    /// Create a new builder with the given node URL.
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into().trim_end_matches('/').to_string(),
            http: HttpConfig::default(),
        }
    }

    /// Set the request timeout. By default requests never time out.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.http.timeout = Some(timeout);
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.http.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.http.default_headers.push((name.into(), value.into()));
        self
    }

    /// Build the client.
    pub fn build(self) -> RpcResult<SuiRpcClient> {
        Ok(SuiRpcClient {
            http_client: self.http.build_client()?,
            rpc_url: self.rpc_url,
            next_id: Arc::new(AtomicU64::new(1)),
        })
    }
}

/// Sui full node JSON-RPC client.
#[derive(Debug, Clone)]
pub struct SuiRpcClient {
    http_client: Client,
    rpc_url: String,
    next_id: Arc<AtomicU64>,
}

impl SuiRpcClient {
    /// Create a new client with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(rpc_url: impl Into<String>) -> RpcResult<Self> {
        SuiRpcClientBuilder::new(rpc_url).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(rpc_url: impl Into<String>) -> SuiRpcClientBuilder {
        SuiRpcClientBuilder::new(rpc_url)
    }

    /// Get the node URL.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Total SUI balance owned by `owner`.
    pub async fn get_balance(&self, owner: &SuiAddress) -> RpcResult<Balance> {
        self.call("suix_getBalance", [owner.to_string()]).await
    }

    /// Perform a single JSON-RPC call. Never retried.
    pub async fn call<P, T>(&self, method: &str, params: P) -> RpcResult<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest::new(id, method, params);

        tracing::debug!(id, method, url = %self.rpc_url, "Sending RPC request");

        let response = self
            .http_client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RpcError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: JsonRpcResponse<T> = serde_json::from_str(&body)
            .map_err(|e| RpcError::Deserialize(e.to_string()))?;

        if let Some(error) = envelope.error {
            return Err(RpcError::JsonRpc {
                code: error.code,
                message: error.message,
            });
        }

        envelope.result.ok_or_else(|| RpcError::MissingResult {
            method: method.to_string(),
        })
    }
}
