//! Shared fixtures for archive service integration tests
#![allow(dead_code)]

use arsip_classifier::Classifier;
use arsip_core::{
    ArchiveRecord, ClassificationOutcome, ClassificationResult, FileCategory, FileMetadata,
    RecordId, StorageBackend,
};
use arsip_storage::{BlobStore, StorageError, StorageResult};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

pub const BLOB_KEY: &str = "digiarsip_files";

pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub fn record(id: &str, file_name: &str, upload_date: DateTime<Utc>, tags: &[&str]) -> ArchiveRecord {
    ArchiveRecord {
        id: RecordId::new(id),
        file_name: file_name.to_string(),
        file_type: "application/pdf".to_string(),
        size: 1_000,
        upload_date,
        category: FileCategory::Other,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        uploaded_by: "u1".to_string(),
        description: None,
    }
}

pub fn file(name: &str) -> FileMetadata {
    FileMetadata::new(name, "application/pdf", 2_048).unwrap()
}

pub fn success(category: FileCategory, tags: &[&str]) -> ClassificationOutcome {
    ClassificationOutcome::Success(ClassificationResult {
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        summary: "Ringkasan dokumen.".to_string(),
    })
}

/// Blob store whose writes can be switched to fail
#[derive(Debug, Default)]
pub struct FlakyBlobStore {
    inner: arsip_storage::MemoryBlobStore,
    fail_writes: AtomicBool,
}

impl FlakyBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl BlobStore for FlakyBlobStore {
    async fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, data: Vec<u8>) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::WriteFailed("disk full".to_string()));
        }
        self.inner.put(key, data).await
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        self.inner.delete(key).await
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}

/// Classifier that holds the answer for one file name until released,
/// and answers every other file immediately.
#[derive(Debug)]
pub struct GatedClassifier {
    pub gate: Arc<Notify>,
    pub held_file: String,
}

impl GatedClassifier {
    pub fn new(held_file: &str) -> Self {
        Self {
            gate: Arc::new(Notify::new()),
            held_file: held_file.to_string(),
        }
    }
}

#[async_trait]
impl Classifier for GatedClassifier {
    fn name(&self) -> &str {
        "gated"
    }

    fn is_configured(&self) -> bool {
        true
    }

    async fn classify(&self, file: &FileMetadata) -> ClassificationOutcome {
        if file.file_name() == self.held_file {
            self.gate.notified().await;
            return success(FileCategory::Finance, &["late"]);
        }
        success(FileCategory::Legal, &["perda"])
    }
}
