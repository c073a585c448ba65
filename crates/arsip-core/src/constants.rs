/// Name of the blob holding the serialized archive collection.
pub const DEFAULT_ARCHIVE_BLOB_KEY: &str = "digiarsip_files";

/// Maximum number of tags kept on a classification result.
pub const MAX_TAGS: usize = 5;

/// Number of entries shown in the "recent uploads" list.
pub const RECENT_UPLOADS_LIMIT: usize = 5;

/// Prefix of generated record ids.
pub const RECORD_ID_PREFIX: &str = "f-";
