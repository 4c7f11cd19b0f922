//! `sui-mint` command line entry point.
//!
//! Reads `suiprivkey1...` keys from a file and, for each wallet in turn,
//! prints its balance, signs the mint message and submits it.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (default `sui_mint=info`).

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sui_mint::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "sui-mint", version, about = "Submit signed free-mint requests for a list of Sui wallets")]
struct Cli {
    /// File with one `suiprivkey1...` key per line; other lines are ignored.
    #[arg(short, long, default_value = DEFAULT_KEYS_FILE)]
    keys_file: PathBuf,

    /// Sui full node JSON-RPC URL.
    #[arg(long, default_value = DEFAULT_RPC_URL)]
    rpc_url: String,

    /// Mint API endpoint.
    #[arg(long, default_value = DEFAULT_MINT_URL)]
    mint_url: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sui_mint=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let keys = match load_key_batch(&cli.keys_file)? {
        KeyBatch::Keys(keys) => keys,
        KeyBatch::NoKeys(notice) => {
            println!("{}", notice);
            return Ok(());
        }
    };

    tracing::info!(count = keys.len(), rpc_url = %cli.rpc_url, mint_url = %cli.mint_url, "Processing wallets");

    let rpc = SuiRpcClient::new(cli.rpc_url)?;
    let mint = MintClient::new(cli.mint_url)?;

    let report = WalletProcessor::new(rpc, mint).run(keys).await;
    println!("\n{}", report);

    Ok(())
}
