//! @ai:module:intent Metric types for benchmark results
//! @ai:module:layer domain
//! @ai:module:public_api LanguageCounter, LanguageAccuracy, BenchmarkResults
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

/// @ai:intent Raw per-language counters collected during a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageCounter {
    pub language: String,
    /// Sentences actually fed to the predictor, post-filtering
    pub sample_count: u32,
    pub correct_count: u32,
}

impl LanguageCounter {
    /// @ai:intent Fraction of correctly top-1-predicted sentences
    /// @ai:post None when no sentence was scored
    /// @ai:effects pure
    pub fn accuracy(&self) -> Option<f64> {
        if self.sample_count == 0 {
            return None;
        }

        Some(f64::from(self.correct_count) / f64::from(self.sample_count))
    }
}

/// @ai:intent Finalized accuracy for one language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageAccuracy {
    pub language: String,
    pub sample_count: u32,
    pub correct_count: u32,
    pub accuracy: f64,
}

/// @ai:intent Version-stamped snapshot of one benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResults {
    pub timestamp: String,
    pub version: String,
    pub classifier: String,
    pub min_sentence_length: usize,
    pub max_sentence_length: usize,
    pub total_languages: u32,
    pub total_sentences: u64,
    /// Ranked: accuracy descending, ties broken by sample count descending
    pub languages: Vec<LanguageAccuracy>,
    /// Languages whose load or prediction failed; excluded from the ranking
    /// but never silently dropped
    #[serde(default)]
    pub failed_languages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_fraction() {
        let counter = LanguageCounter {
            language: "en".to_string(),
            sample_count: 4,
            correct_count: 3,
        };
        assert!((counter.accuracy().unwrap() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_accuracy_undefined_without_samples() {
        let counter = LanguageCounter {
            language: "fr".to_string(),
            sample_count: 0,
            correct_count: 0,
        };
        assert!(counter.accuracy().is_none());
    }
}
