//! Mint message generation and signing.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::keys::{SuiAddress, SuiKeypair};
use crate::mint::types::MintRequest;
use crate::network::MAINNET;

/// Generate the message a wallet signs to request a mint.
///
/// # Returns
///
/// ```text
/// The wallet address {address} is currently doing free minting now which has no gas fees or costs..
/// ```
///
/// The trailing double period is part of the message the API verifies.
pub fn mint_message(address: &SuiAddress) -> String {
    format!(
        "The wallet address {} is currently doing free minting now which has no gas fees or costs..",
        address
    )
}

/// Build a signed mainnet [`MintRequest`] for `keypair`.
pub fn sign_mint_request(keypair: &SuiKeypair) -> MintRequest {
    let address = keypair.address();
    let message = mint_message(&address);
    let signature = keypair.sign(message.as_bytes());

    MintRequest {
        address: address.to_string(),
        signature: STANDARD.encode(signature),
        message,
        network: MAINNET.to_string(),
    }
}
