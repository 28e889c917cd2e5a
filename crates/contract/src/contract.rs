//! Record accessor for balance records
//!
//! Every operation is a single pass through the world state of the supplied
//! transaction context. Isolation and ordering of conflicting writes are left
//! to the host ledger.

use tracing::{debug, info};

use asset_store::{ScopedIterator, SELECT_ALL};

use crate::{Asset, ContractError, ContractResult, TransactionContext};

/// The balance record contract
#[derive(Debug, Default, Clone, Copy)]
pub struct AssetContract;

impl AssetContract {
    pub fn new() -> Self {
        Self
    }

    /// Write a new record under `msisdn`
    ///
    /// An existing record under the same key is replaced without error.
    pub async fn create_asset(
        &self,
        ctx: &dyn TransactionContext,
        msisdn: &str,
        asset: Asset,
    ) -> ContractResult<()> {
        let asset_json = asset.to_bytes()?;
        ctx.stub().put_state(msisdn, &asset_json).await?;

        info!("[{}] Created asset {}", ctx.tx_id(), msisdn);
        Ok(())
    }

    /// Read the record stored under `msisdn`
    pub async fn read_asset(
        &self,
        ctx: &dyn TransactionContext,
        msisdn: &str,
    ) -> ContractResult<Asset> {
        let asset_json = match ctx.stub().get_state(msisdn).await? {
            Some(bytes) if !bytes.is_empty() => bytes,
            _ => {
                return Err(ContractError::NotFound(format!(
                    "Asset {} does not exist",
                    msisdn
                )))
            }
        };

        let asset = Asset::from_bytes(&asset_json)?;
        debug!("[{}] Read asset {}", ctx.tx_id(), msisdn);
        Ok(asset)
    }

    /// Replace every field of the record stored under `msisdn`
    ///
    /// The record must already exist. Fields are not merged: the stored
    /// record becomes exactly `asset`.
    pub async fn update_asset(
        &self,
        ctx: &dyn TransactionContext,
        msisdn: &str,
        asset: Asset,
    ) -> ContractResult<()> {
        let previous = self.read_asset(ctx, msisdn).await?;
        debug!(
            "[{}] Updating asset {} (balance {} -> {})",
            ctx.tx_id(),
            msisdn,
            previous.balance,
            asset.balance
        );

        let asset_json = asset.to_bytes()?;
        ctx.stub().put_state(msisdn, &asset_json).await?;

        info!("[{}] Updated asset {}", ctx.tx_id(), msisdn);
        Ok(())
    }

    /// List every record in the world state, in the order the query yields them
    ///
    /// On failure the error carries the records decoded so far. The query
    /// iterator is closed on every path.
    pub async fn get_all_assets(&self, ctx: &dyn TransactionContext) -> ContractResult<Vec<Asset>> {
        let iterator = ctx.stub().get_query_result(SELECT_ALL).await?;
        let mut results = ScopedIterator::new(iterator);

        let mut assets = Vec::new();
        while results.has_next() {
            match next_asset(&mut results) {
                Ok(asset) => assets.push(asset),
                Err(source) => {
                    return Err(ContractError::Partial {
                        assets,
                        source: Box::new(source),
                    })
                }
            }
        }

        debug!("[{}] Listed {} assets", ctx.tx_id(), assets.len());
        Ok(assets)
    }
}

fn next_asset(results: &mut ScopedIterator) -> ContractResult<Asset> {
    let entry = results.next()?;
    Ok(Asset::from_bytes(&entry.value)?)
}
