//! Archive store: the ordered, persisted collection of archive records
//!
//! Records are kept most-recent-first. Every mutation rewrites the whole
//! collection to a single named blob; if that write fails the mutation is
//! undone so memory and blob never disagree.

use arsip_core::{Action, ArchiveError, ArchiveRecord, ArchiveResult, RecordId, Session};
use arsip_storage::BlobStore;
use std::collections::HashSet;
use std::sync::Arc;

/// How the collection was obtained at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rehydration {
    /// The persisted blob was read successfully
    Restored { records: usize },
    /// No blob existed yet; the seed collection was used
    Missing,
    /// The blob could not be read or decoded; the seed collection was used
    Corrupt { reason: String },
}

/// Result of a confirmed delete request
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted(ArchiveRecord),
    NotFound,
    /// The user declined the confirmation; nothing changed
    Declined,
}

pub struct ArchiveStore {
    blob_store: Arc<dyn BlobStore>,
    blob_key: String,
    records: Vec<ArchiveRecord>,
    rehydration: Rehydration,
}

impl std::fmt::Debug for ArchiveStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveStore")
            .field("backend", &self.blob_store.backend_type())
            .field("blob_key", &self.blob_key)
            .field("records", &self.records.len())
            .field("rehydration", &self.rehydration)
            .finish()
    }
}

fn decode(data: &[u8]) -> Result<Vec<ArchiveRecord>, String> {
    let records: Vec<ArchiveRecord> =
        serde_json::from_slice(data).map_err(|e| format!("invalid archive blob: {}", e))?;

    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(&record.id) {
            return Err(format!("duplicate record id {}", record.id));
        }
    }
    Ok(records)
}

impl ArchiveStore {
    /// Load the collection from `blob_key`, falling back to `seed` when the
    /// blob is absent or unusable. Never fails.
    pub async fn open(
        blob_store: Arc<dyn BlobStore>,
        blob_key: impl Into<String>,
        seed: Vec<ArchiveRecord>,
    ) -> Self {
        let blob_key = blob_key.into();

        let (records, rehydration) = match blob_store.get(&blob_key).await {
            Ok(Some(data)) => match decode(&data) {
                Ok(records) => {
                    let count = records.len();
                    (records, Rehydration::Restored { records: count })
                }
                Err(reason) => (seed, Rehydration::Corrupt { reason }),
            },
            Ok(None) => (seed, Rehydration::Missing),
            Err(e) => (
                seed,
                Rehydration::Corrupt {
                    reason: e.to_string(),
                },
            ),
        };

        match &rehydration {
            Rehydration::Restored { records } => {
                tracing::info!(blob_key = %blob_key, records, "Archive restored from blob")
            }
            Rehydration::Missing => {
                tracing::info!(
                    blob_key = %blob_key,
                    records = records.len(),
                    "No archive blob found, starting from seed collection"
                )
            }
            Rehydration::Corrupt { reason } => {
                tracing::warn!(
                    blob_key = %blob_key,
                    reason = %reason,
                    records = records.len(),
                    "Archive blob unusable, starting from seed collection"
                )
            }
        }

        Self {
            blob_store,
            blob_key,
            records,
            rehydration,
        }
    }

    pub fn rehydration(&self) -> &Rehydration {
        &self.rehydration
    }

    /// Records, most recently inserted first
    pub fn records(&self) -> &[ArchiveRecord] {
        &self.records
    }

    pub fn get(&self, id: &RecordId) -> Option<&ArchiveRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add a record at the front and persist.
    pub async fn insert(&mut self, record: ArchiveRecord) -> ArchiveResult<()> {
        if self.get(&record.id).is_some() {
            return Err(ArchiveError::DuplicateId(record.id.to_string()));
        }

        let id = record.id.clone();
        self.records.insert(0, record);

        if let Err(e) = self.persist().await {
            self.records.remove(0);
            return Err(e);
        }

        tracing::info!(record_id = %id, records = self.records.len(), "Archive record inserted");
        Ok(())
    }

    /// Remove a record by id and persist. `Ok(None)` when no such record exists.
    pub async fn delete(&mut self, id: &RecordId) -> ArchiveResult<Option<ArchiveRecord>> {
        let Some(position) = self.records.iter().position(|r| &r.id == id) else {
            tracing::debug!(record_id = %id, "Delete requested for unknown record");
            return Ok(None);
        };

        let removed = self.records.remove(position);

        if let Err(e) = self.persist().await {
            self.records.insert(position, removed);
            return Err(e);
        }

        tracing::info!(record_id = %id, records = self.records.len(), "Archive record deleted");
        Ok(Some(removed))
    }

    /// Authorized, confirmed delete. `confirm` sees the record and decides;
    /// declining leaves the archive untouched.
    pub async fn delete_as<F>(
        &mut self,
        session: &Session,
        id: &RecordId,
        confirm: F,
    ) -> ArchiveResult<DeleteOutcome>
    where
        F: FnOnce(&ArchiveRecord) -> bool,
    {
        session.require(Action::Delete)?;

        let Some(record) = self.get(id) else {
            return Ok(DeleteOutcome::NotFound);
        };

        if !confirm(record) {
            tracing::debug!(record_id = %id, user_id = %session.user_id(), "Delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        match self.delete(id).await? {
            Some(record) => Ok(DeleteOutcome::Deleted(record)),
            None => Ok(DeleteOutcome::NotFound),
        }
    }

    async fn persist(&self) -> ArchiveResult<()> {
        let data = serde_json::to_vec(&self.records)?;
        self.blob_store
            .put(&self.blob_key, data)
            .await
            .map_err(|e| {
                tracing::error!(blob_key = %self.blob_key, error = %e, "Failed to persist archive");
                ArchiveError::Persistence(e.to_string())
            })
    }
}
