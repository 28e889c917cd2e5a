//! Transaction context handed to every contract call

use std::sync::Arc;

use asset_store::Storage;

/// What the host runtime provides to a running transaction
pub trait TransactionContext: Send + Sync {
    /// The world state this transaction reads and writes
    fn stub(&self) -> &dyn Storage;

    /// Identifier of the running transaction
    fn tx_id(&self) -> &str;
}

/// A context backed by a shared store
#[derive(Clone)]
pub struct StubContext {
    storage: Arc<dyn Storage>,
    tx_id: String,
}

impl StubContext {
    /// Create a context with a fresh transaction id
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_tx_id(storage, uuid::Uuid::new_v4().to_string())
    }

    pub fn with_tx_id(storage: Arc<dyn Storage>, tx_id: impl Into<String>) -> Self {
        Self {
            storage,
            tx_id: tx_id.into(),
        }
    }
}

impl TransactionContext for StubContext {
    fn stub(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    fn tx_id(&self) -> &str {
        &self.tx_id
    }
}
