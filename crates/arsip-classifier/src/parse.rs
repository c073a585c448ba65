//! Parse and validate model output into a classification result

use anyhow::{Context, Result};
use arsip_core::validation::normalize_tags;
use arsip_core::{ClassificationResult, FileCategory};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RawClassification {
    category: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    summary: String,
}

/// Strip a markdown code fence if the model wrapped its JSON in one
fn extract_json(text: &str) -> &str {
    if text.contains("```json") {
        text.split("```json")
            .nth(1)
            .and_then(|s| s.split("```").next())
            .unwrap_or(text)
            .trim()
    } else if text.contains("```") {
        text.split("```")
            .nth(1)
            .and_then(|s| s.split("```").next())
            .unwrap_or(text)
            .trim()
    } else {
        text.trim()
    }
}

/// Parse the model's answer. Empty text, invalid JSON, an unknown category
/// or an empty summary are errors.
pub fn parse_classification(text: &str) -> Result<ClassificationResult> {
    let json_text = extract_json(text);
    if json_text.is_empty() {
        anyhow::bail!("Empty response from classifier");
    }

    let raw: RawClassification =
        serde_json::from_str(json_text).context("Failed to parse classification result as JSON")?;

    let category: FileCategory = raw
        .category
        .parse()
        .with_context(|| format!("Classifier returned unknown category {:?}", raw.category))?;

    let summary = raw.summary.trim().to_string();
    if summary.is_empty() {
        anyhow::bail!("Classifier returned an empty summary");
    }

    Ok(ClassificationResult {
        category,
        tags: normalize_tags(&raw.tags),
        summary,
    })
}
