//! Dealer/subscriber balance record contract
//!
//! This crate provides the balance record contract: a record type keyed by
//! subscriber number (MSISDN), the transaction context the host hands to each
//! call, and the create/read/update/list operations plus a by-name router.

use thiserror::Error;

use asset_store::StorageError;

pub mod asset;
pub mod context;
pub mod contract;
pub mod router;

// Re-exports
pub use asset::Asset;
pub use context::{StubContext, TransactionContext};
pub use contract::AssetContract;

/// Error types for contract operations
#[derive(Error, Debug)]
pub enum ContractError {
    /// Error reported by the world state
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A record could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No record is stored under the key
    #[error("{0}")]
    NotFound(String),

    /// Listing failed partway; `assets` holds what was decoded before the failure
    #[error("Query failed after {} records: {source}", .assets.len())]
    Partial {
        assets: Vec<Asset>,
        source: Box<ContractError>,
    },

    /// Bad transaction arguments
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No transaction with the requested name
    #[error("Unknown function: {0}")]
    UnknownFunction(String),
}

/// Result type for contract operations
pub type ContractResult<T> = Result<T, ContractError>;
