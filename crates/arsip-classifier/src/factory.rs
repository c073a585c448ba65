use anyhow::Result;
use arsip_core::{ClassifierProvider, Config};
use std::sync::Arc;

use crate::Classifier;

/// Create the classifier selected by configuration
pub fn create_classifier(config: &Config) -> Result<Arc<dyn Classifier>> {
    let api_key = config.classifier_api_key.clone();

    let classifier: Arc<dyn Classifier> = match config.classifier_provider {
        #[cfg(feature = "classifier-gemini")]
        ClassifierProvider::Gemini => Arc::new(
            crate::GeminiClassifier::new(api_key)?
                .with_model(&config.classifier_model)
                .with_base_url(&config.classifier_base_url),
        ),

        #[cfg(not(feature = "classifier-gemini"))]
        ClassifierProvider::Gemini => {
            anyhow::bail!("Gemini classifier not available (classifier-gemini feature not enabled)")
        }

        #[cfg(feature = "classifier-anthropic")]
        ClassifierProvider::Anthropic => Arc::new(
            crate::AnthropicClassifier::new(api_key)?
                .with_model(&config.classifier_model)
                .with_base_url(&config.classifier_base_url),
        ),

        #[cfg(not(feature = "classifier-anthropic"))]
        ClassifierProvider::Anthropic => anyhow::bail!(
            "Anthropic classifier not available (classifier-anthropic feature not enabled)"
        ),
    };

    tracing::info!(
        backend = classifier.name(),
        model = %config.classifier_model,
        configured = classifier.is_configured(),
        "Classifier ready"
    );

    Ok(classifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_provider_is_gemini() {
        let classifier = create_classifier(&Config::ephemeral()).unwrap();
        assert_eq!(classifier.name(), "gemini");
        assert!(!classifier.is_configured());
    }

    #[test]
    fn test_anthropic_provider() {
        let mut config = Config::ephemeral();
        config.classifier_provider = ClassifierProvider::Anthropic;
        config.classifier_api_key = Some("sk-ant-test-key".to_string());

        let classifier = create_classifier(&config).unwrap();
        assert_eq!(classifier.name(), "anthropic");
        assert!(classifier.is_configured());
    }
}
