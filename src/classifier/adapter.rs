//! @ai:module:intent Normalize classifier input and output around predict
//! @ai:module:layer application
//! @ai:module:public_api PredictionAdapter
//! @ai:module:stateless true

use crate::classifier::client::ClassifierClientTrait;
use crate::config::ClassifierConfig;
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::Arc;
use std::time::Duration;

/// @ai:intent Wraps the classifier behind a top-label contract
///            Shared read-only across all in-flight predictions
pub struct PredictionAdapter<C: ClassifierClientTrait> {
    client: Arc<C>,
    top_k: u32,
    timeout: Option<Duration>,
    label_prefix: Regex,
}

impl<C: ClassifierClientTrait> PredictionAdapter<C> {
    /// @ai:intent Create an adapter over a shared classifier client
    /// @ai:effects pure
    pub fn new(client: Arc<C>, config: &ClassifierConfig) -> Self {
        Self {
            client,
            top_k: config.top_k,
            timeout: config.timeout_secs.map(Duration::from_secs),
            label_prefix: Regex::new(r"^__label__").expect("valid label prefix pattern"),
        }
    }

    /// @ai:intent Make a text safe for single-line feature extraction
    ///            Applied identically to every text before scoring
    /// @ai:effects pure
    pub fn normalize(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// @ai:intent Strip the backend's label prefix to a canonical code
    /// @ai:effects pure
    pub fn strip_label_prefix(&self, raw: &str) -> String {
        self.label_prefix.replace(raw, "").into_owned()
    }

    /// @ai:intent Top-1 canonical label for a text, None when the classifier
    ///            yields no prediction (e.g. empty input)
    /// @ai:post Err(PredictionTimeout) when the configured deadline elapses
    /// @ai:effects network
    pub async fn predict_top_label(&self, text: &str) -> Result<Option<String>> {
        let normalized = Self::normalize(text);
        let call = self.client.predict(&normalized, self.top_k);

        let predictions = match self.timeout {
            Some(deadline) => match tokio::time::timeout(deadline, call).await {
                Ok(result) => result.map_err(Error::Prediction)?,
                Err(_) => return Err(Error::PredictionTimeout(deadline)),
            },
            None => call.await.map_err(Error::Prediction)?,
        };

        Ok(predictions
            .into_iter()
            .next()
            .map(|p| self.strip_label_prefix(&p.label)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::client::{MockClassifierClient, Prediction};
    use anyhow::Result as AnyResult;

    fn adapter_over(client: MockClassifierClient) -> PredictionAdapter<MockClassifierClient> {
        PredictionAdapter::new(Arc::new(client), &ClassifierConfig::default())
    }

    #[tokio::test]
    async fn test_label_prefix_stripped() {
        let adapter = adapter_over(MockClassifierClient::new("fra"));
        let label = adapter.predict_top_label("une phrase en français").await.unwrap();
        assert_eq!(label.as_deref(), Some("fra"));
    }

    #[tokio::test]
    async fn test_empty_text_yields_none_not_error() {
        let adapter = adapter_over(MockClassifierClient::new("en"));
        let label = adapter.predict_top_label("").await.unwrap();
        assert!(label.is_none());
    }

    #[tokio::test]
    async fn test_newlines_collapsed_before_scoring() {
        let client = Arc::new(MockClassifierClient::new("en"));
        let adapter =
            PredictionAdapter::new(Arc::clone(&client), &ClassifierConfig::default());

        adapter
            .predict_top_label("first line\nsecond line\r\nthird  line")
            .await
            .unwrap();

        let received = client.received();
        assert_eq!(received, vec!["first line second line third line".to_string()]);
    }

    #[tokio::test]
    async fn test_timeout_surfaces_as_prediction_timeout() {
        struct StallingClient;

        impl ClassifierClientTrait for StallingClient {
            async fn predict(&self, _text: &str, _k: u32) -> AnyResult<Vec<Prediction>> {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(vec![])
            }
        }

        let config = ClassifierConfig {
            timeout_secs: Some(1),
            ..Default::default()
        };
        let adapter = PredictionAdapter::new(Arc::new(StallingClient), &config);

        tokio::time::pause();
        let pending = adapter.predict_top_label("some text to score");
        let err = pending.await.unwrap_err();

        assert!(matches!(err, Error::PredictionTimeout(_)));
    }
}
