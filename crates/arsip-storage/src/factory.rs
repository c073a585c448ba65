#[cfg(feature = "storage-local")]
use crate::LocalBlobStore;
use crate::{BlobStore, MemoryBlobStore, StorageBackend, StorageError, StorageResult};
use arsip_core::Config;
use std::sync::Arc;

/// Create a blob store based on configuration
pub async fn create_blob_store(config: &Config) -> StorageResult<Arc<dyn BlobStore>> {
    match config.storage_backend {
        #[cfg(feature = "storage-local")]
        StorageBackend::Local => {
            let base_path = config.local_storage_path.clone().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_PATH not configured".to_string())
            })?;

            tracing::info!(path = %base_path, "Using local blob storage");
            let store = LocalBlobStore::new(base_path).await?;
            Ok(Arc::new(store))
        }

        #[cfg(not(feature = "storage-local"))]
        StorageBackend::Local => Err(StorageError::ConfigError(
            "Local storage backend not available (storage-local feature not enabled)".to_string(),
        )),

        StorageBackend::Memory => {
            tracing::info!("Using in-memory blob storage; nothing will be persisted");
            Ok(Arc::new(MemoryBlobStore::new()))
        }
    }
}
