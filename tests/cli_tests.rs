//! Tests for the command-line harness
//!
//! Commands are parsed with clap and executed against an in-memory or
//! file-backed world state.

use std::sync::Arc;

use clap::Parser;
use serde_json::json;
use tempfile::tempdir;

use asset_ledger::cli::{execute, Cli};
use asset_ledger::contract::{AssetContract, StubContext};
use asset_ledger::store::{FileStorage, MemoryStorage};

async fn run(ctx: &StubContext, argv: &[&str]) -> anyhow::Result<Option<serde_json::Value>> {
    let cli = Cli::try_parse_from(argv)?;
    execute(cli.command, &AssetContract::new(), ctx).await
}

const CREATE: &[&str] = &[
    "asset-ledger",
    "create",
    "1234567890",
    "--dealer-id",
    "dealer1",
    "--mpin",
    "0000",
    "--balance",
    "100",
    "--status",
    "active",
    "--trans-amount",
    "50",
    "--trans-type",
    "credit",
    "--remarks",
    "Test asset",
];

#[tokio::test]
async fn test_create_read_update_list() {
    let ctx = StubContext::new(Arc::new(MemoryStorage::new()));

    assert!(run(&ctx, CREATE).await.unwrap().is_none());

    let read = run(&ctx, &["asset-ledger", "read", "1234567890"]).await.unwrap();
    assert_eq!(
        read,
        Some(json!({
            "dealerID": "dealer1",
            "mpin": "0000",
            "balance": 100,
            "status": "active",
            "transAmount": 50,
            "transType": "credit",
            "remarks": "Test asset",
        }))
    );

    run(
        &ctx,
        &[
            "asset-ledger",
            "update",
            "1234567890",
            "--dealer-id",
            "dealer2",
            "--mpin",
            "1111",
            "--balance",
            "-20",
            "--status",
            "overdrawn",
            "--trans-amount",
            "120",
            "--trans-type",
            "debit",
        ],
    )
    .await
    .unwrap();

    let listed = run(&ctx, &["asset-ledger", "list"]).await.unwrap().unwrap();
    let records = listed.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["dealerID"], "dealer2");
    assert_eq!(records[0]["balance"], -20);
    assert_eq!(records[0]["remarks"], "");
}

#[tokio::test]
async fn test_invoke_command() {
    let ctx = StubContext::new(Arc::new(MemoryStorage::new()));

    run(
        &ctx,
        &[
            "asset-ledger",
            "invoke",
            "CreateAsset",
            "dealer1",
            "1234567890",
            "0000",
            "100",
            "active",
            "50",
            "credit",
            "Test asset",
        ],
    )
    .await
    .unwrap();

    let read = run(&ctx, &["asset-ledger", "invoke", "ReadAsset", "1234567890"])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(read["status"], "active");

    let err = run(&ctx, &["asset-ledger", "invoke", "ReadAsset", "0000000000"])
        .await
        .unwrap_err();
    assert!(format!("{:#}", err).contains("Asset 0000000000 does not exist"));
}

#[tokio::test]
async fn test_read_missing_record_fails() {
    let ctx = StubContext::new(Arc::new(MemoryStorage::new()));
    assert!(run(&ctx, &["asset-ledger", "read", "999"]).await.is_err());
    assert!(run(&ctx, &["asset-ledger", "update", "999", "--dealer-id", "d", "--mpin", "0",
        "--balance", "1", "--status", "s", "--trans-amount", "0", "--trans-type", "t"])
        .await
        .is_err());
}

#[tokio::test]
async fn test_file_backed_state_survives_runs() {
    let temp_dir = tempdir().unwrap();

    {
        let ctx = StubContext::new(Arc::new(FileStorage::new(temp_dir.path()).unwrap()));
        run(&ctx, CREATE).await.unwrap();
    }

    let ctx = StubContext::new(Arc::new(FileStorage::new(temp_dir.path()).unwrap()));
    let listed = run(&ctx, &["asset-ledger", "list"]).await.unwrap().unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[test]
fn test_data_dir_flag_overrides_config() {
    let cli = Cli::try_parse_from(["asset-ledger", "--data-dir", "/tmp/assets", "list"]).unwrap();
    let config = cli.load_config().unwrap();
    assert_eq!(config.data_dir, std::path::PathBuf::from("/tmp/assets"));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let cli = Cli::try_parse_from(["asset-ledger", "--config", "/nonexistent/ledger.yaml", "list"])
        .unwrap();
    assert!(cli.load_config().is_err());
}
