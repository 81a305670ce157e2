//! @ai:module:intent Turn raw counters into a ranked results snapshot
//! @ai:module:layer application
//! @ai:module:public_api MetricsAggregator
//! @ai:module:stateless true

use crate::config::BenchmarkConfig;
use crate::metrics::types::{BenchmarkResults, LanguageAccuracy, LanguageCounter};
use std::cmp::Ordering;

/// @ai:intent Trait for metrics aggregation
pub trait MetricsAggregatorTrait: Send + Sync {
    /// @ai:intent Aggregate counters into a ranked benchmark snapshot
    fn aggregate(
        &self,
        counters: &[LanguageCounter],
        failed_languages: &[String],
        config: &BenchmarkConfig,
    ) -> BenchmarkResults;
}

/// @ai:intent Aggregates per-language counters into ranked results
pub struct MetricsAggregator;

impl MetricsAggregator {
    /// @ai:intent Create a new metrics aggregator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Rank rows: accuracy descending, sample count descending on
    ///            exact accuracy ties; full ties keep their input order
    /// @ai:effects pure
    fn rank(rows: &mut [LanguageAccuracy]) {
        rows.sort_by(|a, b| {
            b.accuracy
                .partial_cmp(&a.accuracy)
                .unwrap_or(Ordering::Equal)
                .then(b.sample_count.cmp(&a.sample_count))
        });
    }
}

impl Default for MetricsAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsAggregatorTrait for MetricsAggregator {
    /// @ai:intent Aggregate counters into a ranked benchmark snapshot
    /// @ai:post languages without a single scored sentence are excluded
    /// @ai:effects pure
    fn aggregate(
        &self,
        counters: &[LanguageCounter],
        failed_languages: &[String],
        config: &BenchmarkConfig,
    ) -> BenchmarkResults {
        let mut languages: Vec<LanguageAccuracy> = counters
            .iter()
            .filter_map(|counter| {
                counter.accuracy().map(|accuracy| LanguageAccuracy {
                    language: counter.language.clone(),
                    sample_count: counter.sample_count,
                    correct_count: counter.correct_count,
                    accuracy,
                })
            })
            .collect();

        Self::rank(&mut languages);

        let total_sentences = languages.iter().map(|l| u64::from(l.sample_count)).sum();

        BenchmarkResults {
            timestamp: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            classifier: config.classifier.endpoint.clone(),
            min_sentence_length: config.run.min_sentence_length,
            max_sentence_length: config.run.max_sentence_length,
            total_languages: languages.len() as u32,
            total_sentences,
            languages,
            failed_languages: failed_languages.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(language: &str, sample_count: u32, correct_count: u32) -> LanguageCounter {
        LanguageCounter {
            language: language.to_string(),
            sample_count,
            correct_count,
        }
    }

    fn aggregate(counters: &[LanguageCounter]) -> BenchmarkResults {
        MetricsAggregator::new().aggregate(counters, &[], &BenchmarkConfig::default())
    }

    #[test]
    fn test_ranked_by_accuracy_descending() {
        let results = aggregate(&[
            counter("de", 10, 5),
            counter("en", 10, 9),
            counter("fr", 10, 7),
        ]);

        let order: Vec<&str> = results.languages.iter().map(|l| l.language.as_str()).collect();
        assert_eq!(order, vec!["en", "fr", "de"]);
    }

    #[test]
    fn test_equal_accuracy_breaks_tie_on_sample_count() {
        // 30/40 and 75/100 are both exactly 0.75.
        let results = aggregate(&[counter("fr", 40, 30), counter("en", 100, 75)]);

        let order: Vec<&str> = results.languages.iter().map(|l| l.language.as_str()).collect();
        assert_eq!(order, vec!["en", "fr"]);
    }

    #[test]
    fn test_full_tie_preserves_input_order() {
        let results = aggregate(&[
            counter("it", 20, 10),
            counter("es", 20, 10),
            counter("pt", 20, 10),
        ]);

        let order: Vec<&str> = results.languages.iter().map(|l| l.language.as_str()).collect();
        assert_eq!(order, vec!["it", "es", "pt"]);
    }

    #[test]
    fn test_zero_sample_language_excluded() {
        let results = aggregate(&[counter("en", 10, 9), counter("fr", 0, 0)]);

        assert_eq!(results.total_languages, 1);
        assert_eq!(results.languages[0].language, "en");
    }

    #[test]
    fn test_totals_cover_ranked_rows() {
        let results = aggregate(&[counter("en", 10, 9), counter("fr", 25, 20)]);

        assert_eq!(results.total_sentences, 35);
        assert_eq!(results.total_languages, 2);
        assert!(results.failed_languages.is_empty());
    }
}
