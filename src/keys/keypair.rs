//! Ed25519 keypairs and Sui addresses.

use std::fmt;

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use solana_keypair::Keypair;
use solana_signer::Signer;

use crate::keys::decode::{DecodedKey, KeyScheme};

type Blake2b256 = Blake2b<U32>;

/// Length of an Ed25519 signature.
pub const SIGNATURE_LEN: usize = 64;

/// A 32-byte Sui account address.
///
/// Displayed as `0x` followed by 64 lowercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuiAddress([u8; 32]);

impl SuiAddress {
    /// Derive the address of an Ed25519 public key:
    /// `BLAKE2b-256(flag || public_key)`.
    pub fn from_ed25519_public_key(public_key: &[u8; 32]) -> Self {
        let mut hasher = Blake2b256::new();
        hasher.update([KeyScheme::Ed25519.flag()]);
        hasher.update(public_key);
        Self(hasher.finalize().into())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SuiAddress({})", self)
    }
}

/// An Ed25519 keypair together with its Sui address.
pub struct SuiKeypair {
    keypair: Keypair,
    address: SuiAddress,
}

impl SuiKeypair {
    /// Build a keypair from a 32-byte Ed25519 seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let keypair = Keypair::new_from_array(*seed);
        let address = SuiAddress::from_ed25519_public_key(&keypair.pubkey().to_bytes());
        Self { keypair, address }
    }

    /// Build a keypair from decoded key material.
    ///
    /// The scheme flag is not consulted; the seed is always treated as Ed25519.
    pub fn from_decoded(key: &DecodedKey) -> Self {
        Self::from_seed(key.seed())
    }

    pub fn address(&self) -> SuiAddress {
        self.address
    }

    /// Raw 32-byte Ed25519 public key.
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.keypair.pubkey().to_bytes()
    }

    /// Sign `message` and return the raw 64-byte Ed25519 signature.
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LEN] {
        let signature = self.keypair.sign_message(message);
        let mut bytes = [0u8; SIGNATURE_LEN];
        bytes.copy_from_slice(signature.as_ref());
        bytes
    }
}

impl fmt::Debug for SuiKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuiKeypair")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
