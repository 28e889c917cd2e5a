//! Command-line harness for the balance record contract

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use asset_config::LedgerConfig;
use asset_contract::{Asset, AssetContract, TransactionContext};

#[derive(Parser, Debug)]
#[command(author, version, about = "Asset ledger command line interface")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the world state (overrides configuration)
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create (or replace) a balance record
    Create {
        /// Subscriber number
        msisdn: String,

        #[command(flatten)]
        fields: AssetArgs,
    },

    /// Show a balance record
    Read {
        /// Subscriber number
        msisdn: String,
    },

    /// Replace every field of an existing balance record
    Update {
        /// Subscriber number
        msisdn: String,

        #[command(flatten)]
        fields: AssetArgs,
    },

    /// List every balance record
    List,

    /// Run a transaction by name with positional arguments
    Invoke {
        /// Transaction name, e.g. CreateAsset
        function: String,

        /// Positional string arguments
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

#[derive(Args, Debug)]
pub struct AssetArgs {
    /// Owning dealer
    #[arg(long)]
    pub dealer_id: String,

    /// Subscriber PIN
    #[arg(long)]
    pub mpin: String,

    #[arg(long, allow_hyphen_values = true)]
    pub balance: i64,

    #[arg(long)]
    pub status: String,

    /// Amount of the last transaction
    #[arg(long, allow_hyphen_values = true)]
    pub trans_amount: i64,

    /// Kind of the last transaction
    #[arg(long)]
    pub trans_type: String,

    #[arg(long, default_value = "")]
    pub remarks: String,
}

impl From<AssetArgs> for Asset {
    fn from(args: AssetArgs) -> Self {
        Asset {
            dealer_id: args.dealer_id,
            mpin: args.mpin,
            balance: args.balance,
            status: args.status,
            trans_amount: args.trans_amount,
            trans_type: args.trans_type,
            remarks: args.remarks,
        }
    }
}

impl Cli {
    /// Resolve configuration from `--config`, the environment and `--data-dir`
    pub fn load_config(&self) -> Result<LedgerConfig> {
        let mut config = match &self.config {
            Some(path) => LedgerConfig::from_file(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => LedgerConfig::from_env().context("loading configuration from environment")?,
        };

        if let Some(data_dir) = &self.data_dir {
            config.data_dir = data_dir.clone();
        }

        Ok(config)
    }
}

/// Run one command against the contract
///
/// Returns the JSON to print, if the command produces any.
pub async fn execute(
    command: Commands,
    contract: &AssetContract,
    ctx: &dyn TransactionContext,
) -> Result<Option<Value>> {
    match command {
        Commands::Create { msisdn, fields } => {
            contract.create_asset(ctx, &msisdn, fields.into()).await?;
            Ok(None)
        }
        Commands::Read { msisdn } => {
            let asset = contract.read_asset(ctx, &msisdn).await?;
            Ok(Some(serde_json::to_value(asset)?))
        }
        Commands::Update { msisdn, fields } => {
            contract.update_asset(ctx, &msisdn, fields.into()).await?;
            Ok(None)
        }
        Commands::List => {
            let assets = contract.get_all_assets(ctx).await?;
            Ok(Some(serde_json::to_value(assets)?))
        }
        Commands::Invoke { function, args } => {
            let payload = contract
                .invoke(ctx, &function, &args)
                .await
                .with_context(|| format!("invoking {}", function))?;
            match payload {
                Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
                None => Ok(None),
            }
        }
    }
}
