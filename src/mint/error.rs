//! Error types for the mint API client.

use thiserror::Error;

use crate::shared::HttpConfigError;

/// Mint-specific error type.
#[derive(Debug, Error)]
pub enum MintError {
    /// HTTP/network error from reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Client could not be configured
    #[error(transparent)]
    Config(#[from] HttpConfigError),

    /// Mint API answered with a non-success status
    #[error("API request failed: {status} {status_text}")]
    RequestFailed { status: u16, status_text: String },

    /// Response body was not valid JSON
    #[error("Failed to parse mint response: {0}")]
    Deserialize(String),
}

/// Result type alias for mint operations.
pub type MintResult<T> = Result<T, MintError>;
