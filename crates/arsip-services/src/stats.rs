//! Dashboard statistics over the archive

use arsip_core::constants::RECENT_UPLOADS_LIMIT;
use arsip_core::{ArchiveRecord, FileCategory};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: FileCategory,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_files: usize,
    pub total_size_bytes: u64,
    pub last_upload: Option<DateTime<Utc>>,
    /// Non-empty categories, in category order
    pub category_distribution: Vec<CategoryCount>,
    pub recent_uploads: Vec<ArchiveRecord>,
}

impl DashboardStats {
    pub fn compute(records: &[ArchiveRecord]) -> Self {
        let category_distribution = FileCategory::ALL
            .into_iter()
            .map(|category| CategoryCount {
                category,
                count: records.iter().filter(|r| r.category == category).count(),
            })
            .filter(|c| c.count > 0)
            .collect();

        let mut by_date: Vec<&ArchiveRecord> = records.iter().collect();
        by_date.sort_by(|a, b| b.upload_date.cmp(&a.upload_date));

        Self {
            total_files: records.len(),
            total_size_bytes: records.iter().map(|r| r.size).sum(),
            last_upload: by_date.first().map(|r| r.upload_date),
            category_distribution,
            recent_uploads: by_date
                .into_iter()
                .take(RECENT_UPLOADS_LIMIT)
                .cloned()
                .collect(),
        }
    }

    pub fn total_size_mb(&self) -> f64 {
        self.total_size_bytes as f64 / (1024.0 * 1024.0)
    }
}
