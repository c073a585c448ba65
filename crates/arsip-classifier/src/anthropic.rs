//! Anthropic (Claude) classifier using the Messages API

use anyhow::{Context, Result};
use arsip_core::{ClassificationOutcome, ClassificationResult, ClassifierProvider, FileMetadata};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::{Duration, Instant};

use crate::classifier::{finish, unconfigured, Classifier};
use crate::parse::parse_classification;
use crate::prompt::build_prompt;

const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 512;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Claude classifier
pub struct AnthropicClassifier {
    http_client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl Debug for AnthropicClassifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AnthropicClassifier")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("configured", &self.api_key.is_some())
            .finish()
    }
}

// Messages API request/response structures
#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<MessageParam>,
}

#[derive(Debug, Serialize)]
struct MessageParam {
    role: String,
    content: Vec<ContentBlock>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text { text: String },
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlockResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlockResponse {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

impl AnthropicClassifier {
    /// A `None` or blank key yields a classifier that always returns the
    /// unconfigured fallback without touching the network.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client for Anthropic classifier")?;

        let provider = ClassifierProvider::Anthropic;
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

    fn messages_url(&self) -> String {
        format!("{}/messages", self.base_url)
    }

    async fn request_classification(
        &self,
        api_key: &str,
        file: &FileMetadata,
    ) -> Result<ClassificationResult> {
        let body = MessagesRequest {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            messages: vec![MessageParam {
                role: "user".to_string(),
                content: vec![ContentBlock::Text {
                    text: build_prompt(file),
                }],
            }],
        };

        let response = self
            .http_client
            .post(self.messages_url())
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .context("Failed to send request to Anthropic Messages API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow::anyhow!(
                "Anthropic Messages API request failed: {} - {}",
                status,
                error_text
            ));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .context("Failed to parse Anthropic Messages API response")?;

        let text = parsed
            .content
            .into_iter()
            .find_map(|b| match b {
                ContentBlockResponse::Text { text } => Some(text),
                ContentBlockResponse::Other => None,
            })
            .unwrap_or_default();

        parse_classification(&text)
    }
}

#[async_trait]
impl Classifier for AnthropicClassifier {
    fn name(&self) -> &str {
        "anthropic"
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
            "Sending classification request to Claude"
        );

        let started = Instant::now();
        let result = self.request_classification(api_key, file).await;
        finish(self.name(), file, started, result)
    }
}
