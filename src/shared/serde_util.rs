//! Custom serde helpers for node wire formats.

/// Deserializes a `u128` sent either as a decimal string or as a JSON number.
///
/// The Sui JSON-RPC API encodes 64/128-bit amounts as strings to avoid
/// precision loss in JavaScript clients.
pub mod u128_string {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(u64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u128, D::Error>
    where
        D: Deserializer<'de>,
    {
        match StringOrNumber::deserialize(deserializer)? {
            StringOrNumber::String(s) => s
                .parse::<u128>()
                .map_err(|_| serde::de::Error::custom(format!("Invalid amount: {}", s))),
            StringOrNumber::Number(n) => Ok(n as u128),
        }
    }

    pub fn serialize<S>(value: &u128, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }
}

/// Deserializes a field that may be absent or an explicit JSON `null`.
///
/// Pair with `#[serde(default)]`: an absent field stays `None`, while a
/// present `null` becomes `Some(Value::Null)`.
pub fn present_value<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    <serde_json::Value as serde::Deserialize>::deserialize(deserializer).map(Some)
}
