//! # sui-mint
//!
//! Signs the free-mint message for a list of Sui wallets and submits each
//! signature to the mint API.
//!
//! ## Modules
//!
//! - [`keys`]: key file loading, bech32 decoding, Ed25519 keypairs and addresses
//! - [`rpc`]: Sui JSON-RPC client (balance queries)
//! - [`mint`]: mint message, request/response types and API client
//! - [`processor`]: the per-key workflow and batch report
//!
//! Plus a shared module:
//! - [`shared`]: amount formatting, HTTP client setup, serde helpers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sui_mint::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let keys = load_keys("private_keys.txt")?;
//!
//!     let rpc = SuiRpcClient::new(DEFAULT_RPC_URL)?;
//!     let mint = MintClient::new(DEFAULT_MINT_URL)?;
//!
//!     let report = WalletProcessor::new(rpc, mint).run(keys).await;
//!     println!("{}", report);
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Private key loading, decoding and signing.
pub mod keys;

/// Sui JSON-RPC client.
pub mod rpc;

/// Mint API message, types and client.
pub mod mint;

/// Per-key workflow and batch reporting.
pub mod processor;

/// Shared utilities used by the RPC and mint clients.
pub mod shared;

/// Network URL constants.
pub mod network;

/// Crate-level error type.
pub mod error;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use sui_mint::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{WalletError, WalletResult};
    pub use crate::keys::{
        decode_private_key, filter_keys, load_key_batch, load_keys, no_keys_message, DecodedKey,
        KeyBatch, KeyError, KeyScheme, LoadError, SuiAddress, SuiKeypair,
    };
    pub use crate::mint::{
        mint_message, sign_mint_request, MintClient, MintClientBuilder, MintError, MintRequest,
        MintResponse,
    };
    pub use crate::network::{DEFAULT_KEYS_FILE, DEFAULT_MINT_URL, DEFAULT_RPC_URL, KEY_PREFIX, MAINNET};
    pub use crate::processor::{
        BalanceSource, BatchReport, KeyOutcome, MintSubmitter, WalletProcessor, WalletReport,
    };
    pub use crate::rpc::{Balance, RpcError, SuiRpcClient, SuiRpcClientBuilder};
    pub use crate::shared::{format_balance, mist_to_sui, MIST_PER_SUI};
}
