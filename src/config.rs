//! @ai:module:intent Configuration structs for the benchmark system
//! @ai:module:layer infrastructure
//! @ai:module:public_api BenchmarkConfig, ClassifierConfig, RunConfig, PathConfig, SampleFilter
//! @ai:module:stateless true

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// @ai:intent Main configuration for the benchmark system
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    pub classifier: ClassifierConfig,
    pub run: RunConfig,
    pub paths: PathConfig,
}

/// @ai:intent Classifier service configuration
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Number of ranked labels requested per prediction
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    /// Per-call deadline in seconds; None disables the deadline
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// @ai:intent Run configuration for benchmark execution
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Records taken from the head of each corpus file before filtering
    #[serde(default = "default_sentence_limit")]
    pub sentence_limit: usize,
    #[serde(default = "default_min_sentence_length")]
    pub min_sentence_length: usize,
    #[serde(default = "default_max_sentence_length")]
    pub max_sentence_length: usize,
    /// Allow-list of canonical classifier codes; None benchmarks every
    /// language with a corpus file present
    #[serde(default)]
    pub include_only: Option<Vec<String>>,
    /// Languages loaded and scored concurrently
    #[serde(default = "default_language_concurrency")]
    pub language_concurrency: usize,
    /// In-flight predictions per language
    #[serde(default = "default_prediction_concurrency")]
    pub prediction_concurrency: usize,
}

/// @ai:intent Path configuration for input/output directories
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    pub corpus_dir: PathBuf,
    pub results_dir: PathBuf,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            run: RunConfig::default(),
            paths: PathConfig::default(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            top_k: default_top_k(),
            timeout_secs: None,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sentence_limit: default_sentence_limit(),
            min_sentence_length: default_min_sentence_length(),
            max_sentence_length: default_max_sentence_length(),
            include_only: None,
            language_concurrency: default_language_concurrency(),
            prediction_concurrency: default_prediction_concurrency(),
        }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from("data"),
            results_dir: PathBuf::from("results"),
        }
    }
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8080/predict".to_string()
}

fn default_top_k() -> u32 {
    1
}

fn default_sentence_limit() -> usize {
    30000
}

fn default_min_sentence_length() -> usize {
    30
}

fn default_max_sentence_length() -> usize {
    250
}

fn default_language_concurrency() -> usize {
    4
}

fn default_prediction_concurrency() -> usize {
    10
}

impl BenchmarkConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @ai:intent Reject configurations that cannot drive a run
    /// @ai:effects pure
    pub fn validate(&self) -> Result<()> {
        if self.run.sentence_limit == 0 {
            return Err(Error::InvalidConfig("sentence_limit must be > 0".into()));
        }

        if self.run.min_sentence_length > self.run.max_sentence_length {
            return Err(Error::InvalidConfig(format!(
                "min_sentence_length ({}) exceeds max_sentence_length ({})",
                self.run.min_sentence_length, self.run.max_sentence_length
            )));
        }

        if self.run.language_concurrency == 0 || self.run.prediction_concurrency == 0 {
            return Err(Error::InvalidConfig(
                "concurrency ceilings must be > 0".into(),
            ));
        }

        if self.classifier.top_k == 0 {
            return Err(Error::InvalidConfig("top_k must be > 0".into()));
        }

        Ok(())
    }

    /// @ai:intent Sentence filter derived from the run section
    /// @ai:effects pure
    pub fn sample_filter(&self) -> SampleFilter {
        SampleFilter {
            min_length: self.run.min_sentence_length,
            max_length: self.run.max_sentence_length,
            limit: self.run.sentence_limit,
        }
    }
}

/// @ai:intent Length bounds and head truncation applied to each corpus
/// @ai:effects pure
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SampleFilter {
    pub min_length: usize,
    pub max_length: usize,
    pub limit: usize,
}

impl SampleFilter {
    /// @ai:intent Check a sentence against the length bounds
    /// @ai:effects pure
    pub fn accepts(&self, sentence: &str) -> bool {
        let len = sentence.chars().count();
        len >= self.min_length && len <= self.max_length
    }
}
