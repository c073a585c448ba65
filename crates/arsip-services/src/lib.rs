//! Arsip Services
//!
//! Archive store, query view, upload workflow, dashboard statistics and the
//! fixed-roster authenticator.

pub mod auth;
pub mod query;
pub mod stats;
pub mod store;
pub mod workflow;

pub use auth::{Authenticator, FixedRoster};
pub use query::{filter_and_sort, ArchiveQuery, CategoryFilter, SortOrder};
pub use stats::{CategoryCount, DashboardStats};
pub use store::{ArchiveStore, DeleteOutcome, Rehydration};
pub use workflow::{
    ApplyOutcome, ClassificationReply, ClassificationTicket, SelectionToken, UploadPhase,
    UploadWorkflow,
};
