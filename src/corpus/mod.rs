//! @ai:module:intent Sentence corpus definitions and loading
//! @ai:module:layer domain
//! @ai:module:public_api LanguageRegistry, LanguageEntry, LanguageSample, TsvCorpusLoader

pub mod loader;
pub mod registry;
pub mod sample;

pub use loader::{CorpusLoaderTrait, TsvCorpusLoader};
pub use registry::{LanguageEntry, LanguageRegistry};
pub use sample::LanguageSample;
