//! Configuration module
//!
//! Settings come from the process environment, optionally seeded from a
//! `.env` file. Absence of a classifier credential is a valid configuration.

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::constants::DEFAULT_ARCHIVE_BLOB_KEY;
use crate::error::{ArchiveError, ArchiveResult};
use crate::storage_types::StorageBackend;
use crate::validation::check_blob_key;

const DEFAULT_LOCAL_STORAGE_PATH: &str = "./data";

/// Remote service used to classify uploads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierProvider {
    Gemini,
    Anthropic,
}

impl ClassifierProvider {
    pub fn default_model(&self) -> &'static str {
        match self {
            ClassifierProvider::Gemini => "gemini-2.5-flash",
            ClassifierProvider::Anthropic => "claude-sonnet-4-20250514",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            ClassifierProvider::Gemini => "https://generativelanguage.googleapis.com/v1beta",
            ClassifierProvider::Anthropic => "https://api.anthropic.com/v1",
        }
    }
}

impl FromStr for ClassifierProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(ClassifierProvider::Gemini),
            "anthropic" | "claude" => Ok(ClassifierProvider::Anthropic),
            _ => Err(anyhow::anyhow!("Invalid classifier provider: {}", s)),
        }
    }
}

impl Display for ClassifierProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ClassifierProvider::Gemini => write!(f, "gemini"),
            ClassifierProvider::Anthropic => write!(f, "anthropic"),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub environment: String,
    // Classifier
    pub classifier_provider: ClassifierProvider,
    pub classifier_api_key: Option<String>,
    pub classifier_model: String,
    pub classifier_base_url: String,
    // Persistence
    pub storage_backend: StorageBackend,
    pub local_storage_path: Option<String>,
    pub archive_blob_key: String,
    pub seed_demo_data: bool,
}

// API keys must never reach logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("classifier_provider", &self.classifier_provider)
            .field(
                "classifier_api_key",
                &self.classifier_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("classifier_model", &self.classifier_model)
            .field("classifier_base_url", &self.classifier_base_url)
            .field("storage_backend", &self.storage_backend)
            .field("local_storage_path", &self.local_storage_path)
            .field("archive_blob_key", &self.archive_blob_key)
            .field("seed_demo_data", &self.seed_demo_data)
            .finish()
    }
}

fn non_blank(value: Result<String, env::VarError>) -> Option<String> {
    value.ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn config_error(err: anyhow::Error) -> ArchiveError {
    ArchiveError::Config(err.to_string())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    pub fn from_env() -> ArchiveResult<Self> {
        dotenvy::dotenv().ok();

        let environment =
            non_blank(env::var("ARSIP_ENVIRONMENT")).unwrap_or_else(|| "development".to_string());

        let classifier_provider = match non_blank(env::var("CLASSIFIER_PROVIDER")) {
            Some(value) => value.parse().map_err(config_error)?,
            None => ClassifierProvider::Gemini,
        };

        let classifier_api_key = match classifier_provider {
            ClassifierProvider::Gemini => {
                non_blank(env::var("GEMINI_API_KEY")).or_else(|| non_blank(env::var("API_KEY")))
            }
            ClassifierProvider::Anthropic => non_blank(env::var("ANTHROPIC_API_KEY")),
        };

        let classifier_model = non_blank(env::var("CLASSIFIER_MODEL"))
            .unwrap_or_else(|| classifier_provider.default_model().to_string());

        let classifier_base_url = non_blank(env::var("CLASSIFIER_BASE_URL"))
            .unwrap_or_else(|| classifier_provider.default_base_url().to_string());

        let storage_backend = match non_blank(env::var("STORAGE_BACKEND")) {
            Some(value) => value.parse().map_err(config_error)?,
            None => StorageBackend::Local,
        };

        let local_storage_path = non_blank(env::var("LOCAL_STORAGE_PATH")).or_else(|| {
            (storage_backend == StorageBackend::Local)
                .then(|| DEFAULT_LOCAL_STORAGE_PATH.to_string())
        });

        let archive_blob_key = env::var("ARCHIVE_BLOB_KEY")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_ARCHIVE_BLOB_KEY.to_string());

        let seed_demo_data = env::var("SEED_DEMO_DATA")
            .ok()
            .and_then(|v| parse_bool(&v))
            .unwrap_or(true);

        Ok(Config {
            environment,
            classifier_provider,
            classifier_api_key,
            classifier_model,
            classifier_base_url,
            storage_backend,
            local_storage_path,
            archive_blob_key,
            seed_demo_data,
        })
    }

    /// Configuration for tests and ephemeral runs: memory storage, no credential.
    pub fn ephemeral() -> Self {
        let provider = ClassifierProvider::Gemini;
        Config {
            environment: "test".to_string(),
            classifier_provider: provider,
            classifier_api_key: None,
            classifier_model: provider.default_model().to_string(),
            classifier_base_url: provider.default_base_url().to_string(),
            storage_backend: StorageBackend::Memory,
            local_storage_path: None,
            archive_blob_key: DEFAULT_ARCHIVE_BLOB_KEY.to_string(),
            seed_demo_data: true,
        }
    }

    /// Reject settings that would only fail later, at the first read or write.
    pub fn validate(&self) -> ArchiveResult<()> {
        check_blob_key(&self.archive_blob_key)
            .map_err(|reason| ArchiveError::Config(format!("ARCHIVE_BLOB_KEY: {}", reason)))?;
        if self.storage_backend == StorageBackend::Local && self.local_storage_path.is_none() {
            return Err(ArchiveError::Config(
                "LOCAL_STORAGE_PATH is required for the local storage backend".to_string(),
            ));
        }
        if self.classifier_model.is_empty() {
            return Err(ArchiveError::Config(
                "CLASSIFIER_MODEL must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}
