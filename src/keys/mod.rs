//! Sui private key handling.
//!
//! - [`loader`]: reads `suiprivkey1...` lines from a key file
//! - [`decode`]: bech32 decoding into raw key material
//! - [`keypair`]: Ed25519 keypair, address derivation and signing

pub mod decode;
pub mod error;
pub mod keypair;
pub mod loader;

pub use decode::{decode_private_key, DecodedKey, KeyScheme, DECODED_KEY_LEN, SUI_PRIVATE_KEY_HRP};
pub use error::{KeyError, KeyResult, LoadError};
pub use keypair::{SuiAddress, SuiKeypair};
pub use loader::{filter_keys, load_key_batch, load_keys, no_keys_message, KeyBatch};
