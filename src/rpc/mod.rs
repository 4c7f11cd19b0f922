//! Sui JSON-RPC client module.
//!
//! Only the balance query is implemented:
//!
//! ```rust,ignore
//! use sui_mint::rpc::SuiRpcClient;
//!
//! let client = SuiRpcClient::new("https://fullnode.mainnet.sui.io:443")?;
//! let balance = client.get_balance(&address).await?;
//! println!("{} MIST", balance.total_balance);
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::{SuiRpcClient, SuiRpcClientBuilder};
pub use error::{RpcError, RpcResult};
pub use types::{Balance, JsonRpcErrorObject, JsonRpcRequest, JsonRpcResponse, SUI_COIN_TYPE};
