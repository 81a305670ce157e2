//! @ai:module:intent CLI for the language identification benchmark
//! @ai:module:layer presentation

use anyhow::Result;
use clap::{Parser, Subcommand};
use langid_bench::{
    classifier::{ClassifierClientTrait, FastTextClient, MockClassifierClient},
    config::BenchmarkConfig,
    corpus::{CorpusLoaderTrait, LanguageRegistry, TsvCorpusLoader},
    metrics::BenchmarkResults,
    report::ReportGenerator,
    runner::BenchmarkOrchestrator,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "langid-bench")]
#[command(about = "Accuracy benchmark for fastText language identification")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the benchmark
    Run {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Benchmark only these canonical codes (comma-separated)
        #[arg(long)]
        include: Option<String>,

        /// Records taken from the head of each corpus file
        #[arg(long)]
        limit: Option<usize>,

        /// Minimum sentence length in characters
        #[arg(long)]
        min_length: Option<usize>,

        /// Maximum sentence length in characters
        #[arg(long)]
        max_length: Option<usize>,

        /// Classifier service endpoint
        #[arg(long)]
        endpoint: Option<String>,

        /// Run against a mock classifier instead of the service
        #[arg(long)]
        dry_run: bool,

        /// Output directory for artifacts
        #[arg(short, long, default_value = "results")]
        output: PathBuf,
    },

    /// Regenerate reports from an existing results snapshot
    Report {
        /// Path to results JSON file
        #[arg(short, long)]
        results: PathBuf,

        /// Output directory for reports
        #[arg(short, long, default_value = "reports")]
        output: PathBuf,
    },

    /// List registered languages with available corpora
    List {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate corpus files against the registry and length bounds
    Validate {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "benchmark.toml")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("langid_bench=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            include,
            limit,
            min_length,
            max_length,
            endpoint,
            dry_run,
            output,
        } => {
            run_benchmark(RunArgs {
                config,
                include,
                limit,
                min_length,
                max_length,
                endpoint,
                dry_run,
                output,
            })
            .await
        }
        Commands::Report { results, output } => generate_reports(results, output),
        Commands::List { config } => list_languages(config),
        Commands::Validate { config } => validate(config),
        Commands::Init { output } => init_config(output),
    }
}

struct RunArgs {
    config: Option<PathBuf>,
    include: Option<String>,
    limit: Option<usize>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    endpoint: Option<String>,
    dry_run: bool,
    output: PathBuf,
}

/// @ai:intent Run the benchmark end to end
/// @ai:effects network, fs:read, fs:write
async fn run_benchmark(args: RunArgs) -> Result<()> {
    let mut config = load_or_default_config(args.config)?;

    if let Some(include) = args.include {
        config.run.include_only = Some(
            include
                .split(',')
                .map(|code| code.trim().to_string())
                .collect(),
        );
    }

    if let Some(limit) = args.limit {
        config.run.sentence_limit = limit;
    }

    if let Some(min_length) = args.min_length {
        config.run.min_sentence_length = min_length;
    }

    if let Some(max_length) = args.max_length {
        config.run.max_sentence_length = max_length;
    }

    if let Some(endpoint) = args.endpoint {
        config.classifier.endpoint = endpoint;
    }

    config.validate()?;

    let timestamp = chrono::Utc::now().format("%Y-%m-%d_%H-%M-%S");
    let output_dir = args.output.join(timestamp.to_string());
    tracing::info!("Output directory: {}", output_dir.display());

    let results = if args.dry_run {
        tracing::info!("Running in dry-run mode against a mock classifier");
        let client = Arc::new(MockClassifierClient::new("en"));
        execute(client, config, &output_dir).await?
    } else {
        tracing::info!("Using classifier at {}", config.classifier.endpoint);
        let client = Arc::new(FastTextClient::new(&config.classifier)?);
        execute(client, config, &output_dir).await?
    };

    print_summary(&results);
    Ok(())
}

/// @ai:intent Drive the orchestrator with a chosen classifier backend
/// @ai:effects network, fs:read, fs:write
async fn execute<C: ClassifierClientTrait + 'static>(
    client: Arc<C>,
    config: BenchmarkConfig,
    output_dir: &Path,
) -> Result<BenchmarkResults> {
    let orchestrator = BenchmarkOrchestrator::new(client, config);
    Ok(orchestrator.run(output_dir).await?)
}

/// @ai:intent Regenerate reports from a results snapshot
/// @ai:effects fs:read, fs:write
fn generate_reports(results_path: PathBuf, output_dir: PathBuf) -> Result<()> {
    let content = std::fs::read_to_string(&results_path)?;
    let results: BenchmarkResults = serde_json::from_str(&content)?;

    std::fs::create_dir_all(&output_dir)?;
    ReportGenerator::new().generate_all(&results, &output_dir)?;

    println!("Reports generated in {}", output_dir.display());
    Ok(())
}

/// @ai:intent List registered languages with available corpora
/// @ai:effects fs:read
fn list_languages(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_or_default_config(config_path)?;
    let loader = TsvCorpusLoader::new();

    let available = loader.available_languages(&config.paths.corpus_dir);
    let entries: Vec<_> = available
        .iter()
        .filter_map(|code| LanguageRegistry::by_corpus_code(code))
        .collect();

    println!("Languages with corpora ({}):", entries.len());
    println!();
    println!("{:<8} {:<8} {:<24}", "Corpus", "Symbol", "Language");
    println!("{}", "-".repeat(40));

    for entry in entries {
        println!(
            "{:<8} {:<8} {:<24}",
            entry.corpus_code, entry.canonical, entry.name
        );
    }

    Ok(())
}

/// @ai:intent Validate corpus files against registry and length bounds
/// @ai:effects fs:read
fn validate(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_or_default_config(config_path)?;
    let loader = TsvCorpusLoader::new();
    let filter = config.sample_filter();

    let available = loader.available_languages(&config.paths.corpus_dir);
    let mut unusable = 0;

    for code in &available {
        let Some(entry) = LanguageRegistry::by_corpus_code(code) else {
            println!("  - {code}: not in registry, will be ignored");
            unusable += 1;
            continue;
        };

        match loader.load(&config.paths.corpus_dir, code, &filter) {
            Ok(sentences) if sentences.is_empty() => {
                println!("  - {} ({}): no usable sentences", entry.canonical, code);
                unusable += 1;
            }
            Ok(sentences) => {
                println!(
                    "  - {} ({}): {} usable sentences",
                    entry.canonical,
                    code,
                    sentences.len()
                );
            }
            Err(e) => {
                println!("  - {} ({}): {}", entry.canonical, code, e);
                unusable += 1;
            }
        }
    }

    println!();
    println!(
        "Corpus validation finished: {} files, {} unusable",
        available.len(),
        unusable
    );

    Ok(())
}

/// @ai:intent Initialize default configuration file
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    let config = BenchmarkConfig::default();
    config.save(&output)?;
    println!("Configuration saved to {}", output.display());
    Ok(())
}

/// @ai:intent Load configuration or use defaults
/// @ai:effects fs:read
fn load_or_default_config(path: Option<PathBuf>) -> Result<BenchmarkConfig> {
    match path {
        Some(p) => BenchmarkConfig::load(&p),
        None => {
            let default_path = PathBuf::from("benchmark.toml");

            if default_path.exists() {
                BenchmarkConfig::load(&default_path)
            } else {
                Ok(BenchmarkConfig::default())
            }
        }
    }
}

/// @ai:intent Print ranked summary to console
/// @ai:effects io
fn print_summary(results: &BenchmarkResults) {
    println!();
    println!("Language Identification Benchmark Results");
    println!("==========================================");
    println!();
    println!(
        "Languages: {}  Sentences: {}  Bounds: {} - {} chars",
        results.total_languages,
        results.total_sentences,
        results.min_sentence_length,
        results.max_sentence_length
    );
    println!();
    println!(
        "{:<24} {:<8} {:>8} {:>10}",
        "Language", "Symbol", "Count", "Accuracy"
    );
    println!("{}", "-".repeat(54));

    for row in &results.languages {
        let name = LanguageRegistry::display_name(&row.language).unwrap_or("(unknown)");

        println!(
            "{:<24} {:<8} {:>8} {:>10.4}",
            name, row.language, row.sample_count, row.accuracy
        );
    }

    if !results.failed_languages.is_empty() {
        println!();
        println!(
            "Excluded after failures: {}",
            results.failed_languages.join(", ")
        );
    }

    println!();
}
