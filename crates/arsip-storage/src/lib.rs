//! Arsip Storage Library
//!
//! This crate provides the named-blob persistence boundary used by the archive
//! store: the [`BlobStore`] trait plus local filesystem and in-memory backends.
//!
//! # Blob key format
//!
//! Keys are flat names such as `digiarsip_files`: ASCII letters, digits, `-`,
//! `_` and `.`, never `..` and never a path separator.

pub mod factory;
pub(crate) mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use arsip_core::StorageBackend;
pub use factory::create_blob_store;
#[cfg(feature = "storage-local")]
pub use local::LocalBlobStore;
pub use memory::MemoryBlobStore;
pub use traits::{BlobStore, StorageError, StorageResult};
