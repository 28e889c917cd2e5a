use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use asset_contract::{AssetContract, StubContext};
use asset_ledger::cli::{execute, Cli};
use asset_store::FileStorage;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();
    let config = cli.load_config()?;

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Using world state at {} on channel {}",
        config.data_dir.display(),
        config.channel
    );

    let storage = Arc::new(FileStorage::new(config.data_dir.clone())?);
    let ctx = StubContext::new(storage);
    let contract = AssetContract::new();

    if let Some(output) = execute(cli.command, &contract, &ctx).await? {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}
