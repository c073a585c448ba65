use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use uuid::Uuid;

use super::category::FileCategory;
use super::classification::ClassificationResult;
use crate::constants::RECORD_ID_PREFIX;
use crate::error::ArchiveResult;
use crate::validation::validate_file_name;

/// Opaque archive record identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh, globally unique id
    pub fn generate() -> Self {
        Self(format!("{}{}", RECORD_ID_PREFIX, Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Metadata of a selected file. File bytes are never modeled.
///
/// Only built through [`FileMetadata::new`], so the name is never blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    file_name: String,
    file_type: String,
    size: u64,
}

impl FileMetadata {
    pub fn new(
        file_name: impl Into<String>,
        file_type: impl Into<String>,
        size: u64,
    ) -> ArchiveResult<Self> {
        let file_name = file_name.into();
        validate_file_name(&file_name)?;
        Ok(Self {
            file_name,
            file_type: file_type.into().trim().to_string(),
            size,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// MIME-like content type, empty when unknown
    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Stored metadata entry describing one uploaded document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveRecord {
    pub id: RecordId,
    pub file_name: String,
    pub file_type: String,
    pub size: u64,
    pub upload_date: DateTime<Utc>,
    pub category: FileCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    /// User id of the uploader; a weak reference into the roster
    pub uploaded_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ArchiveRecord {
    /// Build a new record from a confirmed upload, with a fresh id and timestamp
    pub fn from_upload(
        file: &FileMetadata,
        classification: &ClassificationResult,
        uploaded_by: impl Into<String>,
    ) -> Self {
        Self {
            id: RecordId::generate(),
            file_name: file.file_name.clone(),
            file_type: file.file_type.clone(),
            size: file.size,
            upload_date: Utc::now(),
            category: classification.category,
            tags: classification.tags.clone(),
            uploaded_by: uploaded_by.into(),
            description: Some(classification.summary.clone()),
        }
    }

    /// Case-insensitive substring match against the file name or any tag.
    /// `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.file_name.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}
