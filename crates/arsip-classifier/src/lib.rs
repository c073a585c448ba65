//! Arsip Classifier Library
//!
//! Infers an archive category, tags and a one-line summary from file metadata
//! by asking a remote generative model. Classification never fails from the
//! caller's point of view: an unconfigured or failing backend yields a
//! deterministic fallback result.

pub mod classifier;
pub mod factory;
pub mod parse;
pub mod prompt;

#[cfg(feature = "classifier-anthropic")]
pub mod anthropic;
#[cfg(feature = "classifier-gemini")]
pub mod gemini;

pub use classifier::{Classifier, StaticClassifier};
pub use factory::create_classifier;
pub use parse::parse_classification;
pub use prompt::build_prompt;

#[cfg(feature = "classifier-anthropic")]
pub use anthropic::AnthropicClassifier;
#[cfg(feature = "classifier-gemini")]
pub use gemini::GeminiClassifier;
