//! Upload workflow
//!
//! Drives one upload from file selection through classification to a saved
//! archive record:
//!
//! ```text
//! Idle -> FileSelected -> Classifying -> ClassifiedReady ------> (save) -> Idle
//!                                     \-> ClassificationFallback /
//! ```
//!
//! Every selection bumps a generation counter. A classification reply carries
//! the token of the selection it was made for and is dropped if another file
//! has been selected (or the upload cancelled) in the meantime.

use arsip_classifier::Classifier;
use arsip_core::{
    Action, ArchiveRecord, ArchiveResult, ClassificationOutcome, ClassificationResult,
    FileMetadata, Session,
};

use crate::store::ArchiveStore;

/// Identifies one file selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionToken(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    FileSelected {
        file: FileMetadata,
    },
    Classifying {
        file: FileMetadata,
    },
    ClassifiedReady {
        file: FileMetadata,
        result: ClassificationResult,
    },
    ClassificationFallback {
        file: FileMetadata,
        outcome: ClassificationOutcome,
        /// Banner text, set only when the classifier call itself failed
        error: Option<String>,
    },
}

impl UploadPhase {
    pub fn name(&self) -> &'static str {
        match self {
            UploadPhase::Idle => "idle",
            UploadPhase::FileSelected { .. } => "file_selected",
            UploadPhase::Classifying { .. } => "classifying",
            UploadPhase::ClassifiedReady { .. } => "classified_ready",
            UploadPhase::ClassificationFallback { .. } => "classification_fallback",
        }
    }
}

/// A classification request detached from the workflow, so the workflow can
/// accept a new selection while the call is in flight.
#[derive(Debug, Clone)]
pub struct ClassificationTicket {
    token: SelectionToken,
    file: FileMetadata,
}

impl ClassificationTicket {
    pub fn token(&self) -> SelectionToken {
        self.token
    }

    pub fn file(&self) -> &FileMetadata {
        &self.file
    }

    pub async fn run(self, classifier: &dyn Classifier) -> ClassificationReply {
        let outcome = classifier.classify(&self.file).await;
        ClassificationReply {
            token: self.token,
            outcome,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClassificationReply {
    pub token: SelectionToken,
    pub outcome: ClassificationOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// The reply belongs to a superseded selection and was discarded
    Stale,
}

#[derive(Debug)]
pub struct UploadWorkflow {
    session: Session,
    phase: UploadPhase,
    generation: u64,
}

impl UploadWorkflow {
    /// Start an upload session; requires upload permission.
    pub fn new(session: Session) -> ArchiveResult<Self> {
        session.require(Action::Upload)?;
        Ok(Self {
            session,
            phase: UploadPhase::Idle,
            generation: 0,
        })
    }

    pub fn phase(&self) -> &UploadPhase {
        &self.phase
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current_token(&self) -> SelectionToken {
        SelectionToken(self.generation)
    }

    /// Select (or replace) the file; any previous result or error is discarded.
    pub fn select_file(&mut self, file: FileMetadata) -> SelectionToken {
        self.generation += 1;
        tracing::debug!(
            file_name = %file.file_name(),
            size = file.size(),
            generation = self.generation,
            "File selected for upload"
        );
        self.phase = UploadPhase::FileSelected { file };
        self.current_token()
    }

    /// Move the selected file into `Classifying`. Returns `None` unless a file
    /// is selected and not yet being classified.
    pub fn begin_classification(&mut self) -> Option<ClassificationTicket> {
        let UploadPhase::FileSelected { file } = &self.phase else {
            return None;
        };
        let file = file.clone();
        self.phase = UploadPhase::Classifying { file: file.clone() };
        Some(ClassificationTicket {
            token: self.current_token(),
            file,
        })
    }

    /// Apply a classification reply if it belongs to the current selection.
    pub fn apply(&mut self, reply: ClassificationReply) -> ApplyOutcome {
        let is_current = reply.token == self.current_token();
        let UploadPhase::Classifying { file } = &self.phase else {
            tracing::debug!(phase = self.phase.name(), "Discarding classification reply");
            return ApplyOutcome::Stale;
        };
        if !is_current {
            tracing::debug!(
                reply_generation = reply.token.0,
                generation = self.generation,
                "Discarding stale classification reply"
            );
            return ApplyOutcome::Stale;
        }

        tracing::debug!(
            file_name = %file.file_name(),
            outcome = reply.outcome.kind(),
            generation = self.generation,
            "Applying classification reply"
        );

        let file = file.clone();
        self.phase = match reply.outcome {
            ClassificationOutcome::Success(result) => {
                UploadPhase::ClassifiedReady { file, result }
            }
            outcome => {
                let error = outcome.error_notice().map(str::to_string);
                UploadPhase::ClassificationFallback {
                    file,
                    outcome,
                    error,
                }
            }
        };
        ApplyOutcome::Applied
    }

    /// Select a file and classify it straight away.
    pub async fn select_and_classify(
        &mut self,
        file: FileMetadata,
        classifier: &dyn Classifier,
    ) -> ApplyOutcome {
        self.select_file(file);
        match self.begin_classification() {
            Some(ticket) => {
                let reply = ticket.run(classifier).await;
                self.apply(reply)
            }
            None => ApplyOutcome::Stale,
        }
    }

    /// Classification to show and save, if one is available
    pub fn classification(&self) -> Option<&ClassificationResult> {
        match &self.phase {
            UploadPhase::ClassifiedReady { result, .. } => Some(result),
            UploadPhase::ClassificationFallback { outcome, .. } => Some(outcome.result()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            UploadPhase::ClassificationFallback { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    pub fn selected_file(&self) -> Option<&FileMetadata> {
        match &self.phase {
            UploadPhase::Idle => None,
            UploadPhase::FileSelected { file }
            | UploadPhase::Classifying { file }
            | UploadPhase::ClassifiedReady { file, .. }
            | UploadPhase::ClassificationFallback { file, .. } => Some(file),
        }
    }

    /// Save is possible once a file is selected and classified (or fell back).
    pub fn can_save(&self) -> bool {
        self.classification().is_some()
    }

    /// Build the record, insert it and reset to `Idle`. Returns `Ok(None)`
    /// without side effects when saving is not possible yet. On an insert
    /// error the workflow keeps its state so the save can be retried.
    pub async fn save(&mut self, store: &mut ArchiveStore) -> ArchiveResult<Option<ArchiveRecord>> {
        let (Some(file), Some(result)) = (self.selected_file(), self.classification()) else {
            return Ok(None);
        };

        let record = ArchiveRecord::from_upload(file, result, self.session.user_id());
        store.insert(record.clone()).await?;

        tracing::info!(
            record_id = %record.id,
            file_name = %record.file_name,
            category = %record.category,
            user_id = %self.session.user_id(),
            "Upload saved to archive"
        );

        self.reset();
        Ok(Some(record))
    }

    /// Abandon the upload. Late replies for it will be stale.
    pub fn cancel(&mut self) {
        if self.phase != UploadPhase::Idle {
            tracing::debug!(phase = self.phase.name(), "Upload cancelled");
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.generation += 1;
        self.phase = UploadPhase::Idle;
    }
}
