//! @ai:module:intent Compose loader, pool and adapter into a benchmark run
//! @ai:module:layer application
//! @ai:module:public_api BenchmarkOrchestrator
//! @ai:module:stateless false

use crate::classifier::adapter::PredictionAdapter;
use crate::classifier::client::ClassifierClientTrait;
use crate::config::BenchmarkConfig;
use crate::corpus::loader::{CorpusLoaderTrait, TsvCorpusLoader};
use crate::corpus::registry::{LanguageEntry, LanguageRegistry};
use crate::corpus::sample::LanguageSample;
use crate::error::{Error, Result};
use crate::metrics::aggregator::{MetricsAggregator, MetricsAggregatorTrait};
use crate::metrics::types::{BenchmarkResults, LanguageCounter};
use crate::report::json_report::JsonReporter;
use crate::report::ReportGenerator;
use crate::runner::pool::run_all;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// Scored once before the run to fail early on an unreachable classifier.
const WARMUP_TEXT: &str = "The quick brown fox jumps over the lazy dog.";

/// @ai:intent Per-language tally owned by that language's prediction pool
#[derive(Default)]
struct Tally {
    samples: AtomicU32,
    correct: AtomicU32,
}

/// @ai:intent Per-language entry in the counters artifact
#[derive(Serialize)]
struct CounterArtifact {
    sample_count: u32,
    correct_count: u32,
    accuracy: Option<f64>,
}

/// @ai:intent Drives a full benchmark run against a shared classifier
pub struct BenchmarkOrchestrator<C: ClassifierClientTrait + 'static> {
    config: BenchmarkConfig,
    loader: TsvCorpusLoader,
    adapter: Arc<PredictionAdapter<C>>,
}

impl<C: ClassifierClientTrait + 'static> BenchmarkOrchestrator<C> {
    /// @ai:intent Create an orchestrator over a shared classifier client
    /// @ai:effects pure
    pub fn new(client: Arc<C>, config: BenchmarkConfig) -> Self {
        let adapter = Arc::new(PredictionAdapter::new(client, &config.classifier));

        Self {
            config,
            loader: TsvCorpusLoader::new(),
            adapter,
        }
    }

    /// @ai:intent Run the benchmark and persist all artifacts
    /// @ai:post failed languages are excluded from the ranking, logged, and
    ///          carried in the snapshot; artifact failures abort the run
    /// @ai:effects network, fs:read, fs:write
    pub async fn run(&self, output_dir: &Path) -> Result<BenchmarkResults> {
        self.probe().await?;

        let entries = self.included_languages();
        tracing::info!(
            "Benchmarking {} languages from {}",
            entries.len(),
            self.config.paths.corpus_dir.display()
        );

        let samples = self.build_samples(entries).await?;
        let total_sentences: usize = samples.iter().map(LanguageSample::len).sum();
        tracing::info!(
            "Loaded {} languages and {} sentences",
            samples.len(),
            total_sentences
        );

        std::fs::create_dir_all(output_dir).map_err(|e| Error::ArtifactWrite {
            path: output_dir.to_path_buf(),
            cause: e.into(),
        })?;

        let json = JsonReporter::new();

        // Raw sample sets go to disk before the first prediction so any run
        // can be replayed against the exact sentences it scored.
        json.write(&samples, &output_dir.join("samples.json"))?;

        let (counters, failed_languages) = self.score_samples(samples).await?;

        let counter_map: BTreeMap<&str, CounterArtifact> = counters
            .iter()
            .map(|c| {
                (
                    c.language.as_str(),
                    CounterArtifact {
                        sample_count: c.sample_count,
                        correct_count: c.correct_count,
                        accuracy: c.accuracy(),
                    },
                )
            })
            .collect();
        json.write(&counter_map, &output_dir.join("counters.json"))?;

        let results =
            MetricsAggregator::new().aggregate(&counters, &failed_languages, &self.config);

        ReportGenerator::new().generate_all(&results, output_dir)?;

        if !results.failed_languages.is_empty() {
            tracing::error!(
                "Run finished with {} failed language(s) excluded from the report: {}",
                results.failed_languages.len(),
                results.failed_languages.join(", ")
            );
        }

        Ok(results)
    }

    /// @ai:intent Fail early when the classifier is unreachable
    /// @ai:effects network
    async fn probe(&self) -> Result<()> {
        self.adapter.predict_top_label(WARMUP_TEXT).await?;
        tracing::debug!("Classifier warmup probe succeeded");
        Ok(())
    }

    /// @ai:intent Registry languages with a corpus present, intersected with
    ///            the optional allow-list
    /// @ai:effects fs:read
    fn included_languages(&self) -> Vec<&'static LanguageEntry> {
        self.loader
            .available_languages(&self.config.paths.corpus_dir)
            .iter()
            .filter_map(|code| LanguageRegistry::by_corpus_code(code))
            .filter(|entry| match &self.config.run.include_only {
                Some(allow) => allow.iter().any(|code| code == entry.canonical),
                None => true,
            })
            .collect()
    }

    /// @ai:intent Load filtered sample sets, skipping unreadable and empty
    ///            corpora without failing the run
    /// @ai:effects fs:read
    async fn build_samples(
        &self,
        entries: Vec<&'static LanguageEntry>,
    ) -> Result<Vec<LanguageSample>> {
        let filter = self.config.sample_filter();
        let corpus_dir = self.config.paths.corpus_dir.clone();
        let samples = Arc::new(Mutex::new(Vec::new()));

        run_all(entries, self.config.run.language_concurrency, |entry| {
            let corpus_dir = corpus_dir.clone();
            let samples = Arc::clone(&samples);

            async move {
                let loader = TsvCorpusLoader::new();

                match loader.load(&corpus_dir, entry.corpus_code, &filter) {
                    Ok(texts) if texts.is_empty() => {
                        tracing::info!("{}: no usable sentences, skipping", entry.canonical);
                    }
                    Ok(texts) => {
                        tracing::info!("{}: {} sentences", entry.canonical, texts.len());
                        samples
                            .lock()
                            .expect("samples lock poisoned")
                            .push(LanguageSample::new(entry.canonical, texts));
                    }
                    Err(Error::CorpusRead { path, source }) => {
                        tracing::warn!(
                            "Skipping {}: failed to read {} ({})",
                            entry.canonical,
                            path.display(),
                            source
                        );
                    }
                    Err(other) => return Err(other.into()),
                }

                Ok(())
            }
        })
        .await?;

        let mut collected = std::mem::take(
            &mut *samples.lock().expect("samples lock poisoned"),
        );

        // Pool completion order is unconstrained; keep artifacts and
        // downstream tie-breaks deterministic.
        collected.sort_by(|a, b| a.language.cmp(&b.language));
        Ok(collected)
    }

    /// @ai:intent Score every sample set, tallying per-language counters
    /// @ai:post a language whose prediction pool fails is recorded as failed
    ///          and yields no counter
    /// @ai:effects network
    async fn score_samples(
        &self,
        samples: Vec<LanguageSample>,
    ) -> Result<(Vec<LanguageCounter>, Vec<String>)> {
        let prediction_concurrency = self.config.run.prediction_concurrency;
        let counters = Arc::new(Mutex::new(Vec::new()));
        let failed = Arc::new(Mutex::new(Vec::new()));

        run_all(samples, self.config.run.language_concurrency, |sample| {
            let adapter = Arc::clone(&self.adapter);
            let counters = Arc::clone(&counters);
            let failed = Arc::clone(&failed);

            async move {
                let language = sample.language;
                let tally = Arc::new(Tally::default());

                let outcome = run_all(sample.texts, prediction_concurrency, |text| {
                    let adapter = Arc::clone(&adapter);
                    let language = language.clone();
                    let tally = Arc::clone(&tally);

                    async move {
                        match adapter.predict_top_label(&text).await {
                            Ok(Some(label)) => {
                                tally.samples.fetch_add(1, Ordering::Relaxed);

                                if label == language {
                                    tally.correct.fetch_add(1, Ordering::Relaxed);
                                }
                            }
                            Ok(None) => {
                                tally.samples.fetch_add(1, Ordering::Relaxed);
                            }
                            Err(Error::PredictionTimeout(deadline)) => {
                                // A timed-out call is a missed prediction,
                                // not a run failure.
                                tally.samples.fetch_add(1, Ordering::Relaxed);
                                tracing::warn!(
                                    "{language}: prediction timed out after {deadline:?}"
                                );
                            }
                            Err(other) => return Err(other.into()),
                        }

                        Ok(())
                    }
                })
                .await;

                match outcome {
                    Ok(()) => {
                        counters
                            .lock()
                            .expect("counters lock poisoned")
                            .push(LanguageCounter {
                                language,
                                sample_count: tally.samples.load(Ordering::Relaxed),
                                correct_count: tally.correct.load(Ordering::Relaxed),
                            });
                    }
                    Err(error) => {
                        tracing::error!("{language}: aborted after prediction failure: {error}");
                        failed
                            .lock()
                            .expect("failed lock poisoned")
                            .push(language);
                    }
                }

                Ok(())
            }
        })
        .await?;

        let mut counters = std::mem::take(&mut *counters.lock().expect("counters lock poisoned"));
        counters.sort_by(|a, b| a.language.cmp(&b.language));

        let mut failed = std::mem::take(&mut *failed.lock().expect("failed lock poisoned"));
        failed.sort_unstable();

        Ok((counters, failed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::client::{MockClassifierClient, Prediction};
    use crate::corpus::sample::LanguageSample;
    use anyhow::Result as AnyResult;
    use std::collections::HashMap;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_corpus(dir: &Path, code: &str, sentences: &[&str]) {
        let path = dir.join(format!("{code}_sentences.tsv"));
        let mut file = std::fs::File::create(path).unwrap();

        for (i, sentence) in sentences.iter().enumerate() {
            writeln!(file, "{}\t{}\t{}", i + 1, code, sentence).unwrap();
        }
    }

    fn test_config(corpus_dir: PathBuf) -> BenchmarkConfig {
        let mut config = BenchmarkConfig::default();
        config.paths.corpus_dir = corpus_dir;
        config.run.min_sentence_length = 5;
        config.run.max_sentence_length = 250;
        config.run.language_concurrency = 2;
        config.run.prediction_concurrency = 4;
        config
    }

    #[tokio::test]
    async fn test_run_ranks_languages_and_writes_artifacts() {
        let corpus = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();

        write_corpus(
            corpus.path(),
            "eng",
            &["this is an english sentence", "another english sentence"],
        );
        write_corpus(
            corpus.path(),
            "fra",
            &["ceci est une phrase", "encore une phrase"],
        );

        // Everything predicts "en": English scores 1.0, French 0.0.
        let client = Arc::new(MockClassifierClient::new("en"));
        let orchestrator = BenchmarkOrchestrator::new(client, test_config(corpus.path().into()));

        let results = orchestrator.run(output.path()).await.unwrap();

        assert_eq!(results.total_languages, 2);
        assert_eq!(results.total_sentences, 4);
        assert_eq!(results.languages[0].language, "en");
        assert!((results.languages[0].accuracy - 1.0).abs() < f64::EPSILON);
        assert_eq!(results.languages[1].language, "fr");
        assert!((results.languages[1].accuracy - 0.0).abs() < f64::EPSILON);

        assert!(output.path().join("samples.json").exists());
        assert!(output.path().join("counters.json").exists());
        assert!(output
            .path()
            .join(format!("benchmark_results_{}.json", results.version))
            .exists());
        assert!(output.path().join("RESULTS.md").exists());
    }

    #[tokio::test]
    async fn test_sample_artifact_counts_match_reported_sample_counts() {
        let corpus = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();

        write_corpus(
            corpus.path(),
            "eng",
            &["one english sentence", "two english sentences", "ok"],
        );
        write_corpus(corpus.path(), "deu", &["ein deutscher satz"]);

        let client = Arc::new(MockClassifierClient::new("en"));
        let orchestrator = BenchmarkOrchestrator::new(client, test_config(corpus.path().into()));

        let results = orchestrator.run(output.path()).await.unwrap();

        let raw = std::fs::read_to_string(output.path().join("samples.json")).unwrap();
        let samples: Vec<LanguageSample> = serde_json::from_str(&raw).unwrap();

        for row in &results.languages {
            let persisted = samples
                .iter()
                .find(|s| s.language == row.language)
                .unwrap();
            assert_eq!(persisted.len() as u32, row.sample_count);
        }
    }

    #[tokio::test]
    async fn test_unreadable_and_empty_corpora_are_skipped() {
        let corpus = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();

        write_corpus(corpus.path(), "eng", &["a usable english sentence"]);
        // Every Italian sentence is shorter than the minimum length.
        write_corpus(corpus.path(), "ita", &["no", "si"]);

        let client = Arc::new(MockClassifierClient::new("en"));
        let orchestrator = BenchmarkOrchestrator::new(client, test_config(corpus.path().into()));

        let results = orchestrator.run(output.path()).await.unwrap();

        assert_eq!(results.total_languages, 1);
        assert_eq!(results.languages[0].language, "en");
        assert!(results.failed_languages.is_empty());
    }

    #[tokio::test]
    async fn test_include_only_restricts_the_language_set() {
        let corpus = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();

        write_corpus(corpus.path(), "eng", &["a usable english sentence"]);
        write_corpus(corpus.path(), "fra", &["une phrase utilisable"]);

        let mut config = test_config(corpus.path().into());
        config.run.include_only = Some(vec!["fr".to_string()]);

        let client = Arc::new(MockClassifierClient::new("fr"));
        let orchestrator = BenchmarkOrchestrator::new(client, config);

        let results = orchestrator.run(output.path()).await.unwrap();

        assert_eq!(results.total_languages, 1);
        assert_eq!(results.languages[0].language, "fr");
    }

    #[tokio::test]
    async fn test_prediction_failure_excludes_language_but_not_run() {
        struct FailingClient;

        impl ClassifierClientTrait for FailingClient {
            async fn predict(&self, text: &str, _k: u32) -> AnyResult<Vec<Prediction>> {
                if text.contains("phrase") {
                    anyhow::bail!("backend rejected the input");
                }

                Ok(vec![Prediction {
                    label: "__label__en".to_string(),
                    score: 0.99,
                }])
            }
        }

        let corpus = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();

        write_corpus(corpus.path(), "eng", &["a usable english sentence"]);
        write_corpus(corpus.path(), "fra", &["une phrase utilisable"]);

        let orchestrator =
            BenchmarkOrchestrator::new(Arc::new(FailingClient), test_config(corpus.path().into()));

        let results = orchestrator.run(output.path()).await.unwrap();

        assert_eq!(results.failed_languages, vec!["fr".to_string()]);
        assert_eq!(results.total_languages, 1);
        assert_eq!(results.languages[0].language, "en");
    }

    #[tokio::test]
    async fn test_identical_runs_produce_identical_rankings() {
        let corpus = TempDir::new().unwrap();

        write_corpus(
            corpus.path(),
            "eng",
            &["this is an english sentence", "another english sentence"],
        );
        write_corpus(
            corpus.path(),
            "fra",
            &["ceci est une phrase utilisable", "encore une phrase"],
        );

        let responses = HashMap::from([
            ("ceci est une phrase utilisable".to_string(), "fr".to_string()),
        ]);

        let mut snapshots = Vec::new();

        for _ in 0..2 {
            let output = TempDir::new().unwrap();
            let client = Arc::new(MockClassifierClient::with_responses(
                "en",
                responses.clone(),
            ));
            let orchestrator =
                BenchmarkOrchestrator::new(client, test_config(corpus.path().into()));

            let results = orchestrator.run(output.path()).await.unwrap();
            let report = std::fs::read_to_string(output.path().join("RESULTS.md")).unwrap();
            snapshots.push((results.languages.len(), report));
        }

        assert_eq!(snapshots[0], snapshots[1]);
    }
}
