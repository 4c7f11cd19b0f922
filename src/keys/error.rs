//! Error types for key loading and decoding.

use std::path::PathBuf;

use bech32::primitives::decode::CheckedHrpstringError;
use thiserror::Error;

/// Errors produced while decoding a single encoded key.
#[derive(Debug, Error)]
pub enum KeyError {
    /// Not a valid bech32 string (bad charset, checksum or separator)
    #[error("Invalid key encoding: {0}")]
    Decode(#[from] CheckedHrpstringError),

    /// Valid bech32, but not a Sui private key
    #[error("Invalid key prefix: expected {expected}, got {actual}")]
    InvalidHrp {
        expected: &'static str,
        actual: String,
    },

    /// Decoded payload is not flag byte + 32-byte seed
    #[error("Invalid key length: {actual} bytes")]
    InvalidKeyLength { actual: usize },
}

/// Result type alias for key operations.
pub type KeyResult<T> = Result<T, KeyError>;

/// Errors produced while reading the key file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read key file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
