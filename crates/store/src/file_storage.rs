//! File-backed world state
//!
//! Each key is stored as a single file under the base directory. Keys map
//! directly to file names, so they may not contain path separators.

use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::{
    validate_key, QueryResult, Selector, StateQueryIterator, Storage, StorageError,
    StorageResult, VecQueryIterator,
};

/// A basic file system-based storage implementation
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    /// Open a store rooted at `base_path`, creating the directory if needed
    pub fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();
        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::Io(format!("Failed to create {}: {}", base_path.display(), e))
        })?;

        info!("Opened file storage at {}", base_path.display());
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn get_full_path(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        if key == "." || key == ".." || key.contains('/') || key.contains('\\') {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(key))
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get_state(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let path = self.get_full_path(key)?;
        debug!("get_state {}", key);

        match tokio::fs::read(&path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(format!("Failed to read {}: {}", key, e))),
        }
    }

    async fn put_state(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        let path = self.get_full_path(key)?;
        debug!("put_state {} ({} bytes)", key, value.len());

        tokio::fs::write(&path, value)
            .await
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", key, e)))
    }

    async fn get_query_result(&self, query: &str) -> StorageResult<Box<dyn StateQueryIterator>> {
        let selector = Selector::parse(query)?;
        let mut results = Vec::new();

        let mut entries = tokio::fs::read_dir(&self.base_path)
            .await
            .map_err(|e| StorageError::Io(format!("Failed to read directory: {}", e)))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StorageError::Io(format!("Failed to read directory entry: {}", e)))?
        {
            let file_type = entry.file_type().await?;
            if !file_type.is_file() {
                continue;
            }
            let Some(key) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };

            let value = tokio::fs::read(entry.path()).await?;
            if selector.matches(&value) {
                results.push(QueryResult { key, value });
            }
        }

        results.sort_by(|a, b| a.key.cmp(&b.key));
        debug!("get_query_result {} matched {} entries", query, results.len());
        Ok(Box::new(VecQueryIterator::new(results)))
    }
}
