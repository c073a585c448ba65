mod helpers;

use arsip_services::{filter_and_sort, ArchiveQuery, ArchiveStore, CategoryFilter, SortOrder};
use arsip_storage::MemoryBlobStore;
use arsip_core::FileCategory;
use helpers::*;
use std::sync::Arc;

#[tokio::test]
async fn test_sort_descending_by_upload_date() {
    let blobs = Arc::new(MemoryBlobStore::new());
    let mut store = ArchiveStore::open(blobs, BLOB_KEY, Vec::new()).await;
    store.insert(record("jan", "a.pdf", date(2024, 1, 10), &[])).await.unwrap();
    store.insert(record("apr", "b.pdf", date(2024, 4, 2), &[])).await.unwrap();
    store.insert(record("mar", "c.pdf", date(2024, 3, 15), &[])).await.unwrap();

    let view = filter_and_sort(store.records(), &ArchiveQuery::default().sort(SortOrder::Descending));
    let ids: Vec<&str> = view.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["apr", "mar", "jan"]);

    let view = filter_and_sort(store.records(), &ArchiveQuery::default().sort(SortOrder::Ascending));
    let ids: Vec<&str> = view.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["jan", "mar", "apr"]);
}

#[test]
fn test_search_by_tag() {
    let records = vec![
        record("tagged", "Laporan_Q1.xlsx", date(2024, 3, 15), &["keuangan", "2024"]),
        record("other", "Foto_Rapat.jpg", date(2024, 4, 2), &[]),
    ];

    let view = filter_and_sort(&records, &ArchiveQuery::default().search("keuangan"));
    let ids: Vec<&str> = view.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["tagged"]);
}

#[test]
fn test_category_filter_is_exact() {
    let mut finance = record("fin", "Kwitansi.pdf", date(2024, 2, 1), &[]);
    finance.category = FileCategory::Finance;
    let records = vec![finance, record("misc", "Kwitansi_lama.pdf", date(2024, 1, 1), &[])];

    let query = ArchiveQuery::default()
        .search("kwitansi")
        .category(CategoryFilter::Only(FileCategory::Finance));
    let view = filter_and_sort(&records, &query);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id.as_str(), "fin");

    let view = filter_and_sort(&records, &query.clone().category(CategoryFilter::All));
    assert_eq!(view.len(), 2);
}

#[test]
fn test_reapplying_filter_is_stable() {
    let records = vec![
        record("a", "Surat_A.pdf", date(2024, 1, 1), &["surat"]),
        record("b", "Surat_B.pdf", date(2024, 1, 1), &["surat"]),
        record("c", "Foto.jpg", date(2024, 2, 1), &["foto"]),
        record("d", "Surat_D.pdf", date(2023, 5, 1), &[]),
    ];
    let query = ArchiveQuery::default().search("SURAT");

    let first = filter_and_sort(&records, &query);
    let second = filter_and_sort(first.iter().copied(), &query);
    assert_eq!(first, second);

    let ids: Vec<&str> = first.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "d"]);
}
