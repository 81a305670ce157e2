//! @ai:module:intent Markdown report generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api MarkdownReporter
//! @ai:module:stateless true

use crate::corpus::registry::LanguageRegistry;
use crate::error::{Error, Result};
use crate::metrics::BenchmarkResults;
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// @ai:intent Trait for Markdown report generation
pub trait MarkdownReporterTrait: Send + Sync {
    /// @ai:intent Generate Markdown report from results
    fn generate(&self, results: &BenchmarkResults, output_path: &Path) -> Result<()>;
}

/// @ai:intent Renders the ranked accuracy table
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// @ai:intent Create a new Markdown reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Render the ranked table
    /// @ai:post Err(UnknownLanguageCode) when a row's code has no registry
    ///          entry; accuracy is emitted as the raw float, unrounded
    /// @ai:effects pure
    pub fn render(&self, results: &BenchmarkResults) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "# Language Identification Benchmark").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "**Classifier:** {}", results.classifier).unwrap();
        writeln!(output, "**Version:** {}", results.version).unwrap();
        writeln!(output).unwrap();

        writeln!(
            output,
            "| Language ({}) | Symbol | Count ({}) | Accuracy ({} - {} chars) |",
            results.total_languages,
            results.total_sentences,
            results.min_sentence_length,
            results.max_sentence_length
        )
        .unwrap();
        writeln!(output, "| -------- | ------ | ----- | -------- |").unwrap();

        for row in &results.languages {
            let name = LanguageRegistry::display_name(&row.language)?;

            writeln!(
                output,
                "| {} | {} | {} | {} |",
                name, row.language, row.sample_count, row.accuracy
            )
            .unwrap();
        }

        if !results.failed_languages.is_empty() {
            writeln!(output).unwrap();
            writeln!(
                output,
                "Excluded after load/prediction failures: {}",
                results.failed_languages.join(", ")
            )
            .unwrap();
        }

        Ok(output)
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownReporterTrait for MarkdownReporter {
    /// @ai:intent Generate Markdown report to file
    /// @ai:effects fs:write
    fn generate(&self, results: &BenchmarkResults, output_path: &Path) -> Result<()> {
        let content = self.render(results)?;

        std::fs::write(output_path, content).map_err(|e| Error::ArtifactWrite {
            path: output_path.to_path_buf(),
            cause: e.into(),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::LanguageAccuracy;
    use tempfile::TempDir;

    fn results_with(languages: Vec<LanguageAccuracy>) -> BenchmarkResults {
        let total_sentences = languages.iter().map(|l| u64::from(l.sample_count)).sum();

        BenchmarkResults {
            timestamp: "2026-08-07T00:00:00Z".to_string(),
            version: "0.1.0".to_string(),
            classifier: "http://127.0.0.1:8080/predict".to_string(),
            min_sentence_length: 30,
            max_sentence_length: 250,
            total_languages: languages.len() as u32,
            total_sentences,
            languages,
            failed_languages: vec![],
        }
    }

    fn row(language: &str, sample_count: u32, correct_count: u32) -> LanguageAccuracy {
        LanguageAccuracy {
            language: language.to_string(),
            sample_count,
            correct_count,
            accuracy: f64::from(correct_count) / f64::from(sample_count),
        }
    }

    #[test]
    fn test_header_embeds_totals_and_bounds() {
        let reporter = MarkdownReporter::new();
        let results = results_with(vec![row("en", 100, 99), row("fr", 50, 40)]);

        let content = reporter.render(&results).unwrap();

        assert!(content.contains("| Language (2) | Symbol | Count (150) | Accuracy (30 - 250 chars) |"));
    }

    #[test]
    fn test_rows_carry_display_name_and_raw_accuracy() {
        let reporter = MarkdownReporter::new();
        let results = results_with(vec![row("fr", 3, 2)]);

        let content = reporter.render(&results).unwrap();

        assert!(content.contains("| French | fr | 3 | 0.6666666666666666 |"));
    }

    #[test]
    fn test_unknown_code_fails_rendering() {
        let reporter = MarkdownReporter::new();
        let results = results_with(vec![row("zz", 10, 5)]);

        let err = reporter.render(&results).unwrap_err();
        assert!(matches!(err, Error::UnknownLanguageCode(code) if code == "zz"));
    }

    #[test]
    fn test_generate_markdown_report_file() {
        let reporter = MarkdownReporter::new();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("RESULTS.md");

        let results = results_with(vec![row("en", 10, 9)]);
        reporter.generate(&results, &output).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("# Language Identification Benchmark"));
        assert!(content.contains("| English | en | 10 | 0.9 |"));
    }
}
