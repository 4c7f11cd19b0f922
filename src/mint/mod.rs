//! Mint API module.
//!
//! A mint request proves wallet ownership by signing a fixed sentence that
//! embeds the wallet address:
//!
//! 1. Build the message with [`mint_message`]
//! 2. Sign its UTF-8 bytes with the wallet's Ed25519 keypair
//! 3. POST address, base64 signature, message and network tag to the API
//! 4. Read status, message, request hash and queue position from the reply

pub mod client;
pub mod error;
pub mod message;
pub mod types;

pub use client::{MintClient, MintClientBuilder};
pub use error::{MintError, MintResult};
pub use message::{mint_message, sign_mint_request};
pub use types::{MintRequest, MintResponse};
