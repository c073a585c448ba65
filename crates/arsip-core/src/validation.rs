//! Input validation and normalization helpers

use crate::constants::MAX_TAGS;
use crate::error::{ArchiveError, ArchiveResult};

pub const MAX_BLOB_KEY_LENGTH: usize = 128;

/// A file name must contain something other than whitespace.
pub fn validate_file_name(file_name: &str) -> ArchiveResult<()> {
    if file_name.trim().is_empty() {
        return Err(ArchiveError::InvalidInput(
            "File name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Blob keys are flat names: 1-128 ASCII letters, digits, `-`, `_` or `.`,
/// never `..` and never a leading `.`. Returns the reason a key is rejected.
pub fn check_blob_key(key: &str) -> Result<(), String> {
    if key.is_empty() || key.len() > MAX_BLOB_KEY_LENGTH {
        return Err(format!(
            "Blob key must be 1-{} characters",
            MAX_BLOB_KEY_LENGTH
        ));
    }
    if key.contains("..") || key.starts_with('.') {
        return Err(format!("Blob key {:?} may not contain '..' or start with '.'", key));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return Err(format!("Blob key {:?} contains invalid characters", key));
    }
    Ok(())
}

/// Trim and lowercase tags, drop empties and repeats, keep at most [`MAX_TAGS`].
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim().to_lowercase();
        if tag.is_empty() || normalized.contains(&tag) {
            continue;
        }
        normalized.push(tag);
        if normalized.len() == MAX_TAGS {
            break;
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("Laporan.pdf").is_ok());
        assert!(validate_file_name("").is_err());
        assert!(validate_file_name(" \t").is_err());
    }

    #[test]
    fn test_long_file_names_are_accepted() {
        let name = format!("{}.pdf", "Laporan_Tahunan_".repeat(40));
        assert!(name.len() > 255);
        assert!(validate_file_name(&name).is_ok());
    }

    #[test]
    fn test_check_blob_key() {
        assert!(check_blob_key("digiarsip_files").is_ok());
        assert!(check_blob_key("archive-v2.json").is_ok());
        assert!(check_blob_key("").is_err());
        assert!(check_blob_key("a/b").is_err());
        assert!(check_blob_key("a\\b").is_err());
        assert!(check_blob_key("../etc/passwd").is_err());
        assert!(check_blob_key(".hidden").is_err());
        assert!(check_blob_key(&"k".repeat(MAX_BLOB_KEY_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_normalize_tags() {
        let tags = normalize_tags([" Keuangan", "2024", "keuangan", "", "Kuartal 1"]);
        assert_eq!(tags, vec!["keuangan", "2024", "kuartal 1"]);
    }

    #[test]
    fn test_normalize_tags_caps_length() {
        let tags = normalize_tags(["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(tags.len(), MAX_TAGS);
        assert_eq!(tags.last().map(String::as_str), Some("e"));
    }
}
