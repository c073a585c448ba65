//! Error types module
//!
//! All archive failures are unified under [`ArchiveError`]. None of them are
//! fatal to the process: callers either degrade to a safe default or report
//! the error to the user.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues like a missing record
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    #[error("Forbidden: {role} may not {action}")]
    Forbidden { role: String, action: String },

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for archive operations
pub type ArchiveResult<T> = Result<T, ArchiveError>;

impl ArchiveError {
    /// Machine-readable error code (e.g., "DUPLICATE_ID")
    pub fn error_code(&self) -> &'static str {
        match self {
            ArchiveError::InvalidInput(_) => "INVALID_INPUT",
            ArchiveError::NotFound(_) => "NOT_FOUND",
            ArchiveError::DuplicateId(_) => "DUPLICATE_ID",
            ArchiveError::Forbidden { .. } => "FORBIDDEN",
            ArchiveError::Persistence(_) => "PERSISTENCE_ERROR",
            ArchiveError::Serialization(_) => "SERIALIZATION_ERROR",
            ArchiveError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Log level for this error
    pub fn log_level(&self) -> LogLevel {
        match self {
            ArchiveError::InvalidInput(_) | ArchiveError::Forbidden { .. } => LogLevel::Debug,
            ArchiveError::NotFound(_) | ArchiveError::DuplicateId(_) => LogLevel::Warn,
            ArchiveError::Persistence(_)
            | ArchiveError::Serialization(_)
            | ArchiveError::Config(_) => LogLevel::Error,
        }
    }

    /// Whether retrying the same operation may succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ArchiveError::Persistence(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ArchiveError::DuplicateId("f1".to_string()).error_code(),
            "DUPLICATE_ID"
        );
        assert_eq!(
            ArchiveError::Forbidden {
                role: "PUBLIC".to_string(),
                action: "delete".to_string()
            }
            .error_code(),
            "FORBIDDEN"
        );
    }

    #[test]
    fn test_forbidden_message() {
        let err = ArchiveError::Forbidden {
            role: "STAFF".to_string(),
            action: "delete".to_string(),
        };
        assert_eq!(err.to_string(), "Forbidden: STAFF may not delete");
    }

    #[test]
    fn test_only_persistence_is_recoverable() {
        let err = ArchiveError::Persistence("disk full".to_string());
        assert!(err.is_recoverable());
        assert_eq!(err.log_level(), LogLevel::Error);

        let err = ArchiveError::NotFound("Record f9".to_string());
        assert!(!err.is_recoverable());
        assert_eq!(err.log_level(), LogLevel::Warn);

        let err = ArchiveError::Config("bad key".to_string());
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(!err.is_recoverable());
    }
}
