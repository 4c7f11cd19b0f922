//! Shared utilities used by the RPC and mint clients.

pub mod amount;
pub mod http;
pub mod serde_util;

// Re-export commonly used items
pub use amount::{format_balance, mist_to_sui, MIST_PER_SUI};
pub use http::{HttpConfig, HttpConfigError};
