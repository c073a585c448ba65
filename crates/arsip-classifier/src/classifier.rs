//! Classifier trait and shared outcome handling

use arsip_core::{ClassificationOutcome, FileMetadata};
use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Instant;

/// Infers category, tags and summary from file metadata.
///
/// Implementations make at most one request per call and never surface an
/// error: failures become [`ClassificationOutcome::FallbackFailed`] and a
/// missing credential becomes [`ClassificationOutcome::FallbackUnconfigured`].
#[async_trait]
pub trait Classifier: Send + Sync + Debug {
    /// Backend identifier, for logs
    fn name(&self) -> &str;

    /// Whether a credential is present
    fn is_configured(&self) -> bool;

    async fn classify(&self, file: &FileMetadata) -> ClassificationOutcome;
}

/// Convert a backend call result into an outcome, logging either way.
pub(crate) fn finish(
    backend: &str,
    file: &FileMetadata,
    started: Instant,
    result: anyhow::Result<arsip_core::ClassificationResult>,
) -> ClassificationOutcome {
    let duration_ms = started.elapsed().as_secs_f64() * 1000.0;
    match result {
        Ok(result) => {
            tracing::info!(
                backend,
                file_name = %file.file_name(),
                category = %result.category,
                tags = result.tags.len(),
                duration_ms,
                "Classification completed"
            );
            ClassificationOutcome::Success(result)
        }
        Err(e) => {
            tracing::error!(
                backend,
                file_name = %file.file_name(),
                error = %format!("{:#}", e),
                duration_ms,
                "Classification failed, using fallback result"
            );
            ClassificationOutcome::failed(format!("{:#}", e))
        }
    }
}

pub(crate) fn unconfigured(backend: &str, file: &FileMetadata) -> ClassificationOutcome {
    tracing::warn!(
        backend,
        file_name = %file.file_name(),
        "Classifier API key missing, returning default classification"
    );
    ClassificationOutcome::unconfigured()
}

/// Classifier that answers every request with the same outcome.
/// Used for offline runs and in tests.
#[derive(Debug, Clone)]
pub struct StaticClassifier {
    outcome: ClassificationOutcome,
}

impl StaticClassifier {
    pub fn new(outcome: ClassificationOutcome) -> Self {
        Self { outcome }
    }

    /// Behaves like a backend without a credential
    pub fn unconfigured() -> Self {
        Self::new(ClassificationOutcome::unconfigured())
    }
}

#[async_trait]
impl Classifier for StaticClassifier {
    fn name(&self) -> &str {
        "static"
    }

    fn is_configured(&self) -> bool {
        !matches!(self.outcome, ClassificationOutcome::FallbackUnconfigured(_))
    }

    async fn classify(&self, _file: &FileMetadata) -> ClassificationOutcome {
        self.outcome.clone()
    }
}
