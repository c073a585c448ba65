use serde::{Deserialize, Serialize};

use super::category::FileCategory;

pub const UNCONFIGURED_SUMMARY: &str = "API Key not provided. Manual classification required.";
pub const FAILED_SUMMARY: &str = "Classification failed. Please review manually.";

/// Notice shown next to a fallback result when the classifier call failed
pub const CLASSIFICATION_ERROR_NOTICE: &str =
    "Failed to analyze file. Please fill in the details manually.";

/// Category, tags and summary inferred for a file.
/// Ephemeral: consumed to build an archive record, never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: FileCategory,
    pub tags: Vec<String>,
    pub summary: String,
}

impl ClassificationResult {
    /// Deterministic result used when no classifier credential is configured
    pub fn unconfigured() -> Self {
        Self {
            category: FileCategory::Other,
            tags: vec!["manual".to_string(), "upload".to_string()],
            summary: UNCONFIGURED_SUMMARY.to_string(),
        }
    }

    /// Deterministic result used when the classifier was invoked but failed
    pub fn failed() -> Self {
        Self {
            category: FileCategory::Other,
            tags: vec!["auto-generated".to_string(), "error".to_string()],
            summary: FAILED_SUMMARY.to_string(),
        }
    }
}

/// What a classification attempt produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationOutcome {
    Success(ClassificationResult),
    /// No credential configured; no call was made
    FallbackUnconfigured(ClassificationResult),
    /// The call was made but failed or returned unusable output
    FallbackFailed {
        result: ClassificationResult,
        reason: String,
    },
}

impl ClassificationOutcome {
    pub fn unconfigured() -> Self {
        ClassificationOutcome::FallbackUnconfigured(ClassificationResult::unconfigured())
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        ClassificationOutcome::FallbackFailed {
            result: ClassificationResult::failed(),
            reason: reason.into(),
        }
    }

    /// The usable result, whichever variant produced it
    pub fn result(&self) -> &ClassificationResult {
        match self {
            ClassificationOutcome::Success(result)
            | ClassificationOutcome::FallbackUnconfigured(result)
            | ClassificationOutcome::FallbackFailed { result, .. } => result,
        }
    }

    pub fn is_fallback(&self) -> bool {
        !matches!(self, ClassificationOutcome::Success(_))
    }

    /// User-facing error notice; only a failed call raises one
    pub fn error_notice(&self) -> Option<&'static str> {
        match self {
            ClassificationOutcome::FallbackFailed { .. } => Some(CLASSIFICATION_ERROR_NOTICE),
            _ => None,
        }
    }

    /// Short kind name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            ClassificationOutcome::Success(_) => "success",
            ClassificationOutcome::FallbackUnconfigured(_) => "fallback_unconfigured",
            ClassificationOutcome::FallbackFailed { .. } => "fallback_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallbacks_are_deterministic() {
        assert_eq!(
            ClassificationResult::unconfigured(),
            ClassificationResult::unconfigured()
        );
        assert_eq!(ClassificationResult::failed(), ClassificationResult::failed());
        assert_ne!(
            ClassificationResult::unconfigured().tags,
            ClassificationResult::failed().tags
        );
    }

    #[test]
    fn test_fallbacks_use_other_category() {
        assert_eq!(
            ClassificationOutcome::unconfigured().result().category,
            FileCategory::Other
        );
        assert_eq!(
            ClassificationOutcome::failed("timeout").result().category,
            FileCategory::Other
        );
    }

    #[test]
    fn test_error_notice_only_for_failed_call() {
        assert!(ClassificationOutcome::unconfigured().error_notice().is_none());
        assert_eq!(
            ClassificationOutcome::failed("boom").error_notice(),
            Some(CLASSIFICATION_ERROR_NOTICE)
        );

        let success = ClassificationOutcome::Success(ClassificationResult {
            category: FileCategory::Report,
            tags: vec![],
            summary: "x".to_string(),
        });
        assert!(!success.is_fallback());
        assert!(success.error_notice().is_none());
        assert_eq!(success.kind(), "success");
        assert_eq!(ClassificationOutcome::failed("boom").kind(), "fallback_failed");
    }
}
