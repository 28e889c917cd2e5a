//! Key-value ledger capability for the asset contract
//!
//! This crate provides the world-state abstraction the contract writes through:
//! - The `Storage` trait (get, put, rich query)
//! - Query selectors and query iterators with scoped release
//! - In-memory and file-backed storage implementations

use async_trait::async_trait;
use thiserror::Error;

pub mod file_storage;
pub mod iterator;
pub mod memory_storage;
pub mod selector;

pub use file_storage::FileStorage;
pub use iterator::{QueryResult, ScopedIterator, StateQueryIterator, VecQueryIterator};
pub use memory_storage::MemoryStorage;
pub use selector::{Selector, SELECT_ALL};

/// Storage-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Query iterator exhausted")]
    IteratorExhausted,

    #[error("Query iterator already closed")]
    IteratorClosed,

    #[error("Unexpected error: {0}")]
    Other(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// The world-state operations a contract may call on the ledger
#[async_trait]
pub trait Storage: Send + Sync + 'static {
    /// Fetch the value stored under `key`, `None` when nothing is stored
    async fn get_state(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value
    async fn put_state(&self, key: &str, value: &[u8]) -> StorageResult<()>;

    /// Run a rich query and return an iterator over the matching entries
    async fn get_query_result(&self, query: &str) -> StorageResult<Box<dyn StateQueryIterator>>;
}

pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey("key cannot be empty".to_string()));
    }
    Ok(())
}
