//! @ai:module:intent TSV corpus loader for per-language sentence files
//! @ai:module:layer infrastructure
//! @ai:module:public_api TsvCorpusLoader
//! @ai:module:stateless true

use crate::config::SampleFilter;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const CORPUS_SUFFIX: &str = "_sentences.tsv";

/// Tatoeba export records carry id, language, sentence.
const RECORD_FIELDS: usize = 3;

/// @ai:intent Trait for loading sentence corpora
pub trait CorpusLoaderTrait: Send + Sync {
    /// @ai:intent Load one language's filtered sentences
    fn load(&self, corpus_dir: &Path, corpus_code: &str, filter: &SampleFilter)
        -> Result<Vec<String>>;

    /// @ai:intent Enumerate corpus codes with a sentence file present
    fn available_languages(&self, corpus_dir: &Path) -> Vec<String>;
}

/// @ai:intent Loads sentences from `<code>_sentences.tsv` files
/// @ai:effects pure (stateless)
pub struct TsvCorpusLoader;

impl TsvCorpusLoader {
    /// @ai:intent Create a new corpus loader
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Corpus file path for a language code
    /// @ai:effects pure
    fn corpus_path(corpus_dir: &Path, corpus_code: &str) -> PathBuf {
        corpus_dir.join(format!("{corpus_code}{CORPUS_SUFFIX}"))
    }

    /// @ai:intent Extract the sentence field from a record
    ///            Records without exactly 3 tab-separated fields are dropped
    /// @ai:effects pure
    fn sentence_of(record: &str) -> Option<&str> {
        let fields: Vec<&str> = record.split('\t').collect();

        if fields.len() != RECORD_FIELDS {
            return None;
        }

        Some(fields[2])
    }
}

impl Default for TsvCorpusLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusLoaderTrait for TsvCorpusLoader {
    /// @ai:intent Load one language's filtered sentences
    /// @ai:post records past `filter.limit` are never considered, even ones
    ///          the length bounds would accept (truncate, then filter)
    /// @ai:effects fs:read
    fn load(
        &self,
        corpus_dir: &Path,
        corpus_code: &str,
        filter: &SampleFilter,
    ) -> Result<Vec<String>> {
        let path = Self::corpus_path(corpus_dir, corpus_code);

        let content = std::fs::read_to_string(&path).map_err(|source| Error::CorpusRead {
            path: path.clone(),
            source,
        })?;

        let sentences = content
            .lines()
            .take(filter.limit)
            .filter_map(Self::sentence_of)
            .filter(|sentence| filter.accepts(sentence))
            .map(|sentence| sentence.to_string())
            .collect();

        Ok(sentences)
    }

    /// @ai:intent Enumerate corpus codes with a sentence file present
    /// @ai:effects fs:read
    fn available_languages(&self, corpus_dir: &Path) -> Vec<String> {
        let mut codes: Vec<String> = WalkDir::new(corpus_dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                e.file_name()
                    .to_str()
                    .and_then(|name| name.strip_suffix(CORPUS_SUFFIX))
                    .map(|code| code.to_string())
            })
            .collect();

        codes.sort_unstable();
        codes
    }
}
