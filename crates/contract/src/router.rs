//! Routes transactions by function name
//!
//! The host delivers a transaction as a function name plus positional string
//! arguments. Record-writing functions take the arguments in the order
//! `dealerID, msisdn, mpin, balance, status, transAmount, transType, remarks`.

use tracing::debug;

use crate::{Asset, AssetContract, ContractError, ContractResult, TransactionContext};

pub const CREATE_ASSET: &str = "CreateAsset";
pub const READ_ASSET: &str = "ReadAsset";
pub const UPDATE_ASSET: &str = "UpdateAsset";
pub const GET_ALL_ASSETS: &str = "GetAllAssets";

const RECORD_ARGS: usize = 8;

impl AssetContract {
    /// Dispatch a named transaction
    ///
    /// Returns the JSON payload for queries, `None` for writes.
    pub async fn invoke(
        &self,
        ctx: &dyn TransactionContext,
        function: &str,
        args: &[String],
    ) -> ContractResult<Option<Vec<u8>>> {
        debug!("[{}] Invoking {} with {} args", ctx.tx_id(), function, args.len());

        match function {
            CREATE_ASSET => {
                let (msisdn, asset) = parse_record_args(function, args)?;
                self.create_asset(ctx, &msisdn, asset).await?;
                Ok(None)
            }
            UPDATE_ASSET => {
                let (msisdn, asset) = parse_record_args(function, args)?;
                self.update_asset(ctx, &msisdn, asset).await?;
                Ok(None)
            }
            READ_ASSET => {
                expect_args(function, args, 1)?;
                let asset = self.read_asset(ctx, &args[0]).await?;
                Ok(Some(serde_json::to_vec(&asset)?))
            }
            GET_ALL_ASSETS => {
                expect_args(function, args, 0)?;
                let assets = self.get_all_assets(ctx).await?;
                Ok(Some(serde_json::to_vec(&assets)?))
            }
            other => Err(ContractError::UnknownFunction(other.to_string())),
        }
    }
}

fn expect_args(function: &str, args: &[String], expected: usize) -> ContractResult<()> {
    if args.len() != expected {
        return Err(ContractError::InvalidArgument(format!(
            "{} expects {} arguments, got {}",
            function,
            expected,
            args.len()
        )));
    }
    Ok(())
}

fn parse_int(name: &str, value: &str) -> ContractResult<i64> {
    value.trim().parse::<i64>().map_err(|e| {
        ContractError::InvalidArgument(format!("{} must be an integer, got {:?}: {}", name, value, e))
    })
}

fn parse_record_args(function: &str, args: &[String]) -> ContractResult<(String, Asset)> {
    expect_args(function, args, RECORD_ARGS)?;

    let asset = Asset {
        dealer_id: args[0].clone(),
        mpin: args[2].clone(),
        balance: parse_int("balance", &args[3])?,
        status: args[4].clone(),
        trans_amount: parse_int("transAmount", &args[5])?,
        trans_type: args[6].clone(),
        remarks: args[7].clone(),
    };

    Ok((args[1].clone(), asset))
}
