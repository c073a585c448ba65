use crate::keys::validate_key;
use crate::traits::{BlobStore, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem blob store: one file per key under `base_path`
#[derive(Clone, Debug)]
pub struct LocalBlobStore {
    base_path: PathBuf,
}

impl LocalBlobStore {
    /// Create a new LocalBlobStore, creating `base_path` if needed
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalBlobStore { base_path })
    }

    fn key_to_path(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.base_path.join(key))
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let path = self.key_to_path(key)?;

        match fs::read(&path).await {
            Ok(data) => {
                tracing::debug!(
                    path = %path.display(),
                    size_bytes = data.len(),
                    "Local blob read"
                );
                Ok(Some(data))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed(format!(
                "Failed to read file {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn put(&self, key: &str, data: Vec<u8>) -> StorageResult<()> {
        let path = self.key_to_path(key)?;
        let tmp_path = self.base_path.join(format!("{}.tmp", key));
        let size = data.len();
        let start = std::time::Instant::now();

        // Write beside the target and rename so readers never see a torn blob.
        let mut file = fs::File::create(&tmp_path).await.map_err(|e| {
            StorageError::WriteFailed(format!(
                "Failed to create file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::WriteFailed(format!(
                "Failed to write file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!(
                "Failed to sync file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;
        drop(file);

        fs::rename(&tmp_path, &path).await.map_err(|e| {
            StorageError::WriteFailed(format!(
                "Failed to move {} into place: {}",
                path.display(),
                e
            ))
        })?;

        tracing::debug!(
            path = %path.display(),
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local blob write successful"
        );

        Ok(())
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let path = self.key_to_path(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::DeleteFailed(format!(
                "Failed to delete file {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_blob_reads_none() {
        let dir = TempDir::new().unwrap();
        let store = LocalBlobStore::new(dir.path()).await.unwrap();

        assert!(store.get("digiarsip_files").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let dir = TempDir::new().unwrap();
        let store = LocalBlobStore::new(dir.path()).await.unwrap();

        store.put("digiarsip_files", b"[1,2]".to_vec()).await.unwrap();
        store.put("digiarsip_files", b"[3]".to_vec()).await.unwrap();

        let data = store.get("digiarsip_files").await.unwrap();
        assert_eq!(data.as_deref(), Some(&b"[3]"[..]));
        assert!(!dir.path().join("digiarsip_files.tmp").exists());
    }

    #[tokio::test]
    async fn test_creates_nested_base_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = LocalBlobStore::new(&nested).await.unwrap();

        store.put("blob", vec![1]).await.unwrap();
        assert!(nested.join("blob").exists());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = LocalBlobStore::new(dir.path()).await.unwrap();

        store.put("blob", vec![1]).await.unwrap();
        store.delete("blob").await.unwrap();
        store.delete("blob").await.unwrap();
        assert!(store.get("blob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rejects_path_traversal() {
        let dir = TempDir::new().unwrap();
        let store = LocalBlobStore::new(dir.path()).await.unwrap();

        let result = store.put("../escape", vec![1]).await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }
}
