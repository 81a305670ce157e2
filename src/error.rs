//! @ai:module:intent Define error types for the benchmark pipeline
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// @ai:intent Unified error type for all benchmark operations
#[derive(Error, Debug)]
pub enum Error {
    /// Corpus file missing or unreadable. Recovered locally: the affected
    /// language is skipped, the run continues.
    #[error("Failed to read corpus {path}: {source}")]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// First failure surfaced by a concurrency pool. The pool stops
    /// scheduling new items once this is observed.
    #[error("Worker failed: {0}")]
    Worker(anyhow::Error),

    /// Classifier call failed for reasons other than a timeout.
    #[error("Prediction failed: {0}")]
    Prediction(anyhow::Error),

    /// Classifier call exceeded the configured per-call deadline. Counted as
    /// a missed prediction, not a run failure.
    #[error("Prediction timed out after {0:?}")]
    PredictionTimeout(Duration),

    /// A result row carries a code the language registry does not know.
    /// Always fatal: it signals a registry/corpus mismatch.
    #[error("Unknown language code: {0}")]
    UnknownLanguageCode(String),

    /// Artifact persistence failed. Always fatal.
    #[error("Failed to write artifact {path}: {cause}")]
    ArtifactWrite { path: PathBuf, cause: anyhow::Error },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
