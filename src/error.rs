//! Crate-level error type.

use thiserror::Error;

use crate::keys::{KeyError, LoadError};
use crate::mint::MintError;
use crate::rpc::RpcError;

/// Any error raised while loading keys or processing a wallet.
///
/// Each variant is transparent so the per-key error line shows the
/// underlying message unchanged.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error(transparent)]
    Mint(#[from] MintError),
}

/// Result type alias for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;
