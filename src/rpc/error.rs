//! Error types for the Sui JSON-RPC client.

use thiserror::Error;

use crate::shared::HttpConfigError;

/// RPC-specific error type.
#[derive(Debug, Error)]
pub enum RpcError {
    /// HTTP/network error from reqwest
    #[error("RPC request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Client could not be configured
    #[error(transparent)]
    Config(#[from] HttpConfigError),

    /// Node answered with a non-success HTTP status
    #[error("RPC request failed: {status} {body}")]
    HttpStatus { status: u16, body: String },

    /// Node answered with a JSON-RPC error object
    #[error("RPC error {code}: {message}")]
    JsonRpc { code: i64, message: String },

    /// Response carried neither `result` nor `error`
    #[error("RPC response for {method} has no result")]
    MissingResult { method: String },

    /// Response body was not the expected JSON
    #[error("Failed to parse RPC response: {0}")]
    Deserialize(String),
}

/// Result type alias for RPC operations.
pub type RpcResult<T> = Result<T, RpcError>;
