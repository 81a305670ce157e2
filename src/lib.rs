//! @ai:module:intent Language identification benchmark library
//! @ai:module:layer application
//! @ai:module:public_api classifier, config, corpus, error, metrics, report, runner

pub mod classifier;
pub mod config;
pub mod corpus;
pub mod error;
pub mod metrics;
pub mod report;
pub mod runner;

pub use classifier::{
    ClassifierClientTrait, FastTextClient, MockClassifierClient, PredictionAdapter,
};
pub use config::BenchmarkConfig;
pub use corpus::{LanguageRegistry, LanguageSample, TsvCorpusLoader};
pub use error::{Error, Result};
pub use metrics::{BenchmarkResults, LanguageAccuracy, MetricsAggregator};
pub use report::ReportGenerator;
pub use runner::{run_all, BenchmarkOrchestrator};
