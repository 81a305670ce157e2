//! @ai:module:intent Per-language sample set built from a corpus file
//! @ai:module:layer domain
//! @ai:module:public_api LanguageSample
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

/// @ai:intent Sentences sampled from one language's corpus
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageSample {
    /// Canonical classifier code, the ground-truth comparison key
    pub language: String,
    pub texts: Vec<String>,
}

impl LanguageSample {
    /// @ai:intent Create a sample set for a language
    /// @ai:effects pure
    pub fn new(language: impl Into<String>, texts: Vec<String>) -> Self {
        Self {
            language: language.into(),
            texts,
        }
    }

    /// @ai:intent Number of sentences in the sample
    /// @ai:effects pure
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// @ai:intent Whether the sample carries no sentences
    /// @ai:effects pure
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}
