//! @ai:module:intent Accuracy counters and aggregation
//! @ai:module:layer application
//! @ai:module:public_api LanguageCounter, LanguageAccuracy, BenchmarkResults, MetricsAggregator

pub mod aggregator;
pub mod types;

pub use aggregator::{MetricsAggregator, MetricsAggregatorTrait};
pub use types::{BenchmarkResults, LanguageAccuracy, LanguageCounter};
