//! @ai:module:intent HTTP client for the fastText classifier service
//! @ai:module:layer infrastructure
//! @ai:module:public_api FastTextClient, MockClassifierClient, Prediction
//! @ai:module:stateless false

use crate::config::ClassifierConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

/// @ai:intent One ranked label returned by the classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Raw label as emitted by the backend, prefix included
    pub label: String,
    pub score: f64,
}

/// @ai:intent Trait for classifier backends
///            Implementations must be safe for concurrent invocation; the
///            pipeline shares one instance across all in-flight predictions
pub trait ClassifierClientTrait: Send + Sync {
    /// @ai:intent Score a text, returning up to k labels, best first
    fn predict(
        &self,
        text: &str,
        k: u32,
    ) -> impl std::future::Future<Output = Result<Vec<Prediction>>> + Send;
}

/// @ai:intent Prediction request body
#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
    k: u32,
}

/// @ai:intent One prediction in the service response
#[derive(Debug, Deserialize)]
struct RawPrediction {
    label: String,
    prob: f64,
}

/// @ai:intent Client for a fastText model served over HTTP
pub struct FastTextClient {
    client: reqwest::Client,
    endpoint: String,
}

impl FastTextClient {
    /// @ai:intent Create a new classifier client
    /// @ai:effects pure
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

impl ClassifierClientTrait for FastTextClient {
    /// @ai:intent Score a text against the served model
    /// @ai:effects network
    async fn predict(&self, text: &str, k: u32) -> Result<Vec<Prediction>> {
        let request = PredictRequest { text, k };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to classifier service")?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Classifier service error ({}): {}", status, error_text);
        }

        let raw: Vec<RawPrediction> = response
            .json()
            .await
            .context("Failed to parse classifier response")?;

        Ok(raw
            .into_iter()
            .map(|p| Prediction {
                label: p.label,
                score: p.prob,
            })
            .collect())
    }
}

/// @ai:intent Mock classifier for tests and dry runs
pub struct MockClassifierClient {
    default_label: String,
    responses: HashMap<String, String>,
    received: Mutex<Vec<String>>,
}

impl MockClassifierClient {
    /// @ai:intent Create a mock that answers every text with one label
    /// @ai:effects pure
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            default_label: label.into(),
            responses: HashMap::new(),
            received: Mutex::new(Vec::new()),
        }
    }

    /// @ai:intent Create a mock with per-text labels and a fallback
    /// @ai:effects pure
    pub fn with_responses(
        default_label: impl Into<String>,
        responses: HashMap<String, String>,
    ) -> Self {
        Self {
            default_label: default_label.into(),
            responses,
            received: Mutex::new(Vec::new()),
        }
    }

    /// @ai:intent Texts this mock was asked to score, in call order
    /// @ai:effects pure
    pub fn received(&self) -> Vec<String> {
        self.received.lock().expect("received lock poisoned").clone()
    }
}

impl ClassifierClientTrait for MockClassifierClient {
    /// @ai:intent Return the configured label; empty input yields nothing
    /// @ai:effects state:write
    async fn predict(&self, text: &str, _k: u32) -> Result<Vec<Prediction>> {
        self.received
            .lock()
            .expect("received lock poisoned")
            .push(text.to_string());

        if text.is_empty() {
            return Ok(vec![]);
        }

        let label = self
            .responses
            .get(text)
            .unwrap_or(&self.default_label)
            .clone();

        Ok(vec![Prediction {
            label: format!("__label__{label}"),
            score: 0.99,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client_returns_prefixed_label() {
        let client = MockClassifierClient::new("en");
        let predictions = client.predict("hello there", 1).await.unwrap();

        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].label, "__label__en");
    }

    #[tokio::test]
    async fn test_mock_client_empty_input_yields_no_prediction() {
        let client = MockClassifierClient::new("en");
        let predictions = client.predict("", 1).await.unwrap();
        assert!(predictions.is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_per_text_responses() {
        let responses =
            HashMap::from([("bonjour tout le monde".to_string(), "fr".to_string())]);
        let client = MockClassifierClient::with_responses("en", responses);

        let fr = client.predict("bonjour tout le monde", 1).await.unwrap();
        let en = client.predict("hello world", 1).await.unwrap();

        assert_eq!(fr[0].label, "__label__fr");
        assert_eq!(en[0].label, "__label__en");
        assert_eq!(client.received().len(), 2);
    }
}
