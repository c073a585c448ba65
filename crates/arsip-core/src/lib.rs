//! Arsip Core Library
//!
//! This crate provides the domain models, error types, configuration and
//! authorization rules shared by all Arsip components.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod seed;
pub mod storage_types;
pub mod validation;

// Re-export commonly used types
pub use config::{ClassifierProvider, Config};
pub use error::{ArchiveError, ArchiveResult, LogLevel};
pub use models::*;
pub use storage_types::StorageBackend;
