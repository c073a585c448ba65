//! Gemini classifier using Google's Generative Language API

use anyhow::{Context, Result};
use arsip_core::{ClassificationOutcome, ClassificationResult, ClassifierProvider, FileMetadata};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::{Duration, Instant};

use crate::classifier::{finish, unconfigured, Classifier};
use crate::parse::parse_classification;
use crate::prompt::{build_prompt, response_schema};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Gemini classifier
pub struct GeminiClassifier {
    http_client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl Debug for GeminiClassifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiClassifier")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("configured", &self.api_key.is_some())
            .finish()
    }
}

// generateContent request/response structures
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GeminiClassifier {
    /// A `None` or blank key yields a classifier that always returns the
    /// unconfigured fallback without touching the network.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client for Gemini classifier")?;

        let provider = ClassifierProvider::Gemini;
        Ok(Self {
            http_client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: provider.default_model().to_string(),
            base_url: provider.default_base_url().to_string(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    async fn request_classification(
        &self,
        api_key: &str,
        file: &FileMetadata,
    ) -> Result<ClassificationResult> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(build_prompt(file)),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        };

        let response = self
            .http_client
            .post(self.generate_url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .context("Failed to send request to Gemini API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow::anyhow!(
                "Gemini API request failed: {} - {}",
                status,
                error_text
            ));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini API response")?;

        let text: String = parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .next()
            .unwrap_or_default();

        parse_classification(&text)
    }
}

#[async_trait]
impl Classifier for GeminiClassifier {
    fn name(&self) -> &str {
        "gemini"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn classify(&self, file: &FileMetadata) -> ClassificationOutcome {
        let Some(api_key) = self.api_key.as_deref() else {
            return unconfigured(self.name(), file);
        };

        tracing::debug!(
            model = %self.model,
            file_name = %file.file_name(),
            "Sending classification request to Gemini"
        );

        let started = Instant::now();
        let result = self.request_classification(api_key, file).await;
        finish(self.name(), file, started, result)
    }
}
