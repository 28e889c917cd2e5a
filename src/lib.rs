//! Asset Ledger
//!
//! Dealer/subscriber balance records kept on a key-value ledger, with a
//! command-line harness for driving the contract against local state.

/// Module version information
pub mod version {
    /// The current version of the asset ledger library
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

pub mod cli;

/// Re-export the workspace crates for easy access
pub use asset_config as config;
pub use asset_contract as contract;
pub use asset_store as store;
