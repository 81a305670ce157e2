//! @ai:module:intent JSON artifact persistence
//! @ai:module:layer infrastructure
//! @ai:module:public_api JsonReporter
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::metrics::BenchmarkResults;
use serde::Serialize;
use std::path::Path;

/// @ai:intent Trait for JSON report generation
pub trait JsonReporterTrait: Send + Sync {
    /// @ai:intent Persist the results snapshot
    fn generate(&self, results: &BenchmarkResults, output_path: &Path) -> Result<()>;
}

/// @ai:intent Writes serializable values as pretty-printed JSON artifacts
pub struct JsonReporter;

impl JsonReporter {
    /// @ai:intent Create a new JSON reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Persist any serializable artifact
    /// @ai:post Err(ArtifactWrite) on serialization or filesystem failure
    /// @ai:effects fs:write
    pub fn write<T: Serialize>(&self, value: &T, output_path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(|e| Error::ArtifactWrite {
            path: output_path.to_path_buf(),
            cause: e.into(),
        })?;

        std::fs::write(output_path, json).map_err(|e| Error::ArtifactWrite {
            path: output_path.to_path_buf(),
            cause: e.into(),
        })?;

        Ok(())
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReporterTrait for JsonReporter {
    /// @ai:intent Persist the results snapshot
    /// @ai:effects fs:write
    fn generate(&self, results: &BenchmarkResults, output_path: &Path) -> Result<()> {
        self.write(results, output_path)
    }
}
