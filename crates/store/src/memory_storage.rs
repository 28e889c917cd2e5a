use std::collections::BTreeMap;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{
    validate_key, QueryResult, Selector, StateQueryIterator, Storage, StorageResult,
    VecQueryIterator,
};

/// In-memory world state
#[derive(Default)]
pub struct MemoryStorage {
    data: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub async fn len(&self) -> usize {
        self.data.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.data.read().await.is_empty()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_state(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        debug!("get_state {}", key);
        let storage = self.data.read().await;
        Ok(storage.get(key).cloned())
    }

    async fn put_state(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        validate_key(key)?;
        debug!("put_state {} ({} bytes)", key, value.len());
        let mut storage = self.data.write().await;
        storage.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn get_query_result(&self, query: &str) -> StorageResult<Box<dyn StateQueryIterator>> {
        let selector = Selector::parse(query)?;
        let storage = self.data.read().await;

        let results: Vec<QueryResult> = storage
            .iter()
            .filter(|(_, value)| selector.matches(value))
            .map(|(key, value)| QueryResult {
                key: key.clone(),
                value: value.clone(),
            })
            .collect();

        debug!("get_query_result {} matched {} entries", query, results.len());
        Ok(Box::new(VecQueryIterator::new(results)))
    }
}
