//! Mint API request and response types.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::serde_util::present_value;

/// Request body for the mint endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MintRequest {
    /// Wallet address (`0x`-prefixed hex)
    pub address: String,
    /// Standard base64 Ed25519 signature over `message`
    pub signature: String,
    /// The exact message that was signed
    pub message: String,
    /// Network tag, always `mainnet`
    pub network: String,
}

/// Response from the mint endpoint.
///
/// Fields are kept as raw JSON values: they are displayed as given and never
/// interpreted. `None` means the field was absent; an explicit `null` is
/// `Some(Value::Null)`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MintResponse {
    #[serde(default, deserialize_with = "present_value", skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    #[serde(default, deserialize_with = "present_value", skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
    #[serde(default, deserialize_with = "present_value", skip_serializing_if = "Option::is_none")]
    pub request_hash: Option<Value>,
    #[serde(default, deserialize_with = "present_value", skip_serializing_if = "Option::is_none")]
    pub queue_position: Option<Value>,
}

/// Strings print bare, other values as JSON (so `null` stays `null`), absent
/// fields as `undefined`.
fn display_field(value: &Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "undefined".to_string(),
    }
}

impl fmt::Display for MintResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mint request successful:")?;
        writeln!(f, "Status: {}", display_field(&self.status))?;
        writeln!(f, "Message: {}", display_field(&self.message))?;
        writeln!(f, "Request Hash: {}", display_field(&self.request_hash))?;
        write!(f, "Queue Position: {}", display_field(&self.queue_position))
    }
}
