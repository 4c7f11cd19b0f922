//! Bech32 decoding of Sui private keys.
//!
//! An encoded key is `suiprivkey1` followed by the bech32 data part. The
//! decoded payload is 33 bytes:
//!
//! ```text
//! [flag: u8][seed: 32 bytes]
//! ```
//!
//! The flag names the signature scheme. Only the seed is used for derivation.

use std::fmt;

use bech32::primitives::decode::CheckedHrpstring;
use bech32::Bech32;

use crate::keys::error::{KeyError, KeyResult};

/// Human-readable part of a bech32 Sui private key.
pub const SUI_PRIVATE_KEY_HRP: &str = "suiprivkey";

/// Length of the decoded payload (flag byte + 32-byte seed).
pub const DECODED_KEY_LEN: usize = 33;

/// Signature scheme named by the leading flag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyScheme {
    Ed25519,
    Secp256k1,
    Secp256r1,
    Unknown(u8),
}

impl KeyScheme {
    /// The on-wire flag byte.
    pub fn flag(&self) -> u8 {
        match self {
            KeyScheme::Ed25519 => 0x00,
            KeyScheme::Secp256k1 => 0x01,
            KeyScheme::Secp256r1 => 0x02,
            KeyScheme::Unknown(flag) => *flag,
        }
    }
}

impl From<u8> for KeyScheme {
    fn from(flag: u8) -> Self {
        match flag {
            0x00 => KeyScheme::Ed25519,
            0x01 => KeyScheme::Secp256k1,
            0x02 => KeyScheme::Secp256r1,
            other => KeyScheme::Unknown(other),
        }
    }
}

impl fmt::Display for KeyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyScheme::Ed25519 => write!(f, "ed25519"),
            KeyScheme::Secp256k1 => write!(f, "secp256k1"),
            KeyScheme::Secp256r1 => write!(f, "secp256r1"),
            KeyScheme::Unknown(flag) => write!(f, "unknown(0x{:02x})", flag),
        }
    }
}

/// Raw key material recovered from an encoded key.
#[derive(Clone)]
pub struct DecodedKey {
    scheme: KeyScheme,
    seed: [u8; 32],
}

impl DecodedKey {
    /// Split a decoded payload into scheme flag and seed.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::InvalidKeyLength`] unless `bytes` is exactly
    /// [`DECODED_KEY_LEN`] long.
    pub fn from_bytes(bytes: &[u8]) -> KeyResult<Self> {
        if bytes.len() != DECODED_KEY_LEN {
            return Err(KeyError::InvalidKeyLength {
                actual: bytes.len(),
            });
        }

        let mut seed = [0u8; 32];
        seed.copy_from_slice(&bytes[1..]);

        Ok(Self {
            scheme: KeyScheme::from(bytes[0]),
            seed,
        })
    }

    /// Scheme named by the discarded flag byte.
    pub fn scheme(&self) -> KeyScheme {
        self.scheme
    }

    /// The 32-byte private seed.
    pub fn seed(&self) -> &[u8; 32] {
        &self.seed
    }
}

// Never print the seed.
impl fmt::Debug for DecodedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedKey")
            .field("scheme", &self.scheme)
            .field("seed", &"<redacted>")
            .finish()
    }
}

/// Decode a `suiprivkey1...` string.
///
/// # Errors
///
/// - [`KeyError::Decode`] if the string is not valid bech32
/// - [`KeyError::InvalidHrp`] if the prefix is not `suiprivkey`
/// - [`KeyError::InvalidKeyLength`] if the payload is not 33 bytes
pub fn decode_private_key(encoded: &str) -> KeyResult<DecodedKey> {
    let checked = CheckedHrpstring::new::<Bech32>(encoded)?;

    let hrp = checked.hrp().to_lowercase();
    if hrp != SUI_PRIVATE_KEY_HRP {
        return Err(KeyError::InvalidHrp {
            expected: SUI_PRIVATE_KEY_HRP,
            actual: hrp,
        });
    }

    let bytes: Vec<u8> = checked.byte_iter().collect();
    DecodedKey::from_bytes(&bytes)
}
