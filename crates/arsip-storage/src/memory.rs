use crate::keys::validate_key;
use crate::traits::{BlobStore, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process blob store. Contents are lost when the value is dropped.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one blob
    pub fn with_blob(key: impl Into<String>, data: Vec<u8>) -> Self {
        let mut blobs = HashMap::new();
        blobs.insert(key.into(), data);
        Self {
            blobs: RwLock::new(blobs),
        }
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        validate_key(key)?;
        Ok(self.blobs.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, data: Vec<u8>) -> StorageResult<()> {
        validate_key(key)?;
        self.blobs.write().await.insert(key.to_string(), data);
        Ok(())
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.blobs.write().await.remove(key);
        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}
