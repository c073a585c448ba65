//! Blob key validation shared by all backends.

use arsip_core::validation::check_blob_key;

use crate::traits::{StorageError, StorageResult};

pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    check_blob_key(key).map_err(StorageError::InvalidKey)
}
