mod helpers;

use arsip_core::{seed, ArchiveError, RecordId};
use arsip_services::{ArchiveStore, DeleteOutcome, FixedRoster, Authenticator, Rehydration};
use arsip_storage::{BlobStore, LocalBlobStore, MemoryBlobStore};
use helpers::*;
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_most_recent_insert_is_first() {
    let blobs = Arc::new(MemoryBlobStore::new());
    let mut store = ArchiveStore::open(blobs, BLOB_KEY, Vec::new()).await;

    for (i, id) in ["a", "b", "c", "d"].iter().enumerate() {
        store
            .insert(record(id, "x.pdf", date(2024, 1, 1 + i as u32), &[]))
            .await
            .unwrap();
        assert_eq!(store.records()[0].id, RecordId::new(*id));
    }
    assert_eq!(store.len(), 4);
}

#[tokio::test]
async fn test_round_trip_through_local_blob() {
    let dir = TempDir::new().unwrap();
    let blobs = Arc::new(LocalBlobStore::new(dir.path()).await.unwrap());

    let mut store = ArchiveStore::open(blobs.clone(), BLOB_KEY, seed::seed_records()).await;
    store
        .insert(record("n1", "Nota_Dinas.pdf", date(2024, 8, 1), &["nota", "dinas"]))
        .await
        .unwrap();
    store.delete(&RecordId::new("f3")).await.unwrap();
    let expected = store.records().to_vec();

    let reopened = ArchiveStore::open(blobs, BLOB_KEY, Vec::new()).await;
    assert_eq!(
        reopened.rehydration(),
        &Rehydration::Restored {
            records: expected.len()
        }
    );
    assert_eq!(reopened.records(), expected.as_slice());
}

#[tokio::test]
async fn test_corrupt_local_blob_does_not_crash() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(BLOB_KEY), b"\x00\x01 not json").unwrap();
    let blobs = Arc::new(LocalBlobStore::new(dir.path()).await.unwrap());

    let store = ArchiveStore::open(blobs, BLOB_KEY, seed::seed_records()).await;
    assert!(matches!(store.rehydration(), Rehydration::Corrupt { .. }));
    assert_eq!(store.records(), seed::seed_records().as_slice());
}

#[tokio::test]
async fn test_failed_persist_rolls_back_insert() {
    let blobs = Arc::new(FlakyBlobStore::new());
    let mut store = ArchiveStore::open(blobs.clone(), BLOB_KEY, Vec::new()).await;
    store
        .insert(record("a", "a.pdf", date(2024, 1, 1), &[]))
        .await
        .unwrap();

    blobs.fail_writes(true);
    let err = store
        .insert(record("b", "b.pdf", date(2024, 1, 2), &[]))
        .await
        .unwrap_err();

    assert!(matches!(err, ArchiveError::Persistence(_)));
    assert_eq!(store.len(), 1);
    assert!(store.get(&RecordId::new("b")).is_none());
}

#[tokio::test]
async fn test_failed_persist_rolls_back_delete() {
    let blobs = Arc::new(FlakyBlobStore::new());
    let mut store = ArchiveStore::open(blobs.clone(), BLOB_KEY, Vec::new()).await;
    for id in ["a", "b", "c"] {
        store
            .insert(record(id, "x.pdf", date(2024, 1, 1), &[]))
            .await
            .unwrap();
    }
    let before = store.records().to_vec();

    blobs.fail_writes(true);
    assert!(store.delete(&RecordId::new("b")).await.is_err());
    assert_eq!(store.records(), before.as_slice());

    // the blob still holds the last good collection
    let persisted = blobs.get(BLOB_KEY).await.unwrap().unwrap();
    let persisted: Vec<arsip_core::ArchiveRecord> = serde_json::from_slice(&persisted).unwrap();
    assert_eq!(persisted, before);
}

#[tokio::test]
async fn test_delete_as_admin_with_confirmation() {
    let roster = FixedRoster::default();
    let admin = roster.login("u1").unwrap();
    let blobs = Arc::new(MemoryBlobStore::new());
    let mut store = ArchiveStore::open(blobs, BLOB_KEY, seed::seed_records()).await;
    let id = RecordId::new("f2");

    let declined = store.delete_as(&admin, &id, |_| false).await.unwrap();
    assert_eq!(declined, DeleteOutcome::Declined);
    assert!(store.get(&id).is_some());

    let deleted = store
        .delete_as(&admin, &id, |record| record.file_name.starts_with("SK_"))
        .await
        .unwrap();
    assert!(matches!(deleted, DeleteOutcome::Deleted(ref r) if r.id == id));
    assert!(store.get(&id).is_none());

    let again = store.delete_as(&admin, &id, |_| true).await.unwrap();
    assert_eq!(again, DeleteOutcome::NotFound);
}

#[tokio::test]
async fn test_delete_as_staff_is_forbidden() {
    let staff = FixedRoster::default().login("u2").unwrap();
    let blobs = Arc::new(MemoryBlobStore::new());
    let mut store = ArchiveStore::open(blobs, BLOB_KEY, seed::seed_records()).await;

    let mut asked = false;
    let result = store
        .delete_as(&staff, &RecordId::new("f1"), |_| {
            asked = true;
            true
        })
        .await;

    assert!(matches!(result, Err(ArchiveError::Forbidden { .. })));
    assert!(!asked);
    assert_eq!(store.len(), 5);
}
