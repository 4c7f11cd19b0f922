//! Network URL constants for the mint tool.

/// Default Sui full node JSON-RPC URL.
pub const DEFAULT_RPC_URL: &str = "https://fullnode.mainnet.sui.io:443";

/// Default mint API endpoint.
pub const DEFAULT_MINT_URL: &str = "https://coj-gdc2025-api.cmsd.dev/mint";

/// Network tag sent with every mint request.
pub const MAINNET: &str = "mainnet";

/// Prefix of a bech32-encoded Sui private key.
pub const KEY_PREFIX: &str = "suiprivkey1";

/// Key file read when none is given on the command line.
pub const DEFAULT_KEYS_FILE: &str = "private_keys.txt";
