//! @ai:module:intent Static registry mapping corpus codes to classifier codes
//! @ai:module:layer domain
//! @ai:module:public_api LanguageRegistry, LanguageEntry
//! @ai:module:stateless true

use crate::error::{Error, Result};

/// @ai:intent One registered language
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// ISO 639-3 code used in corpus file names (Tatoeba export)
    pub corpus_code: &'static str,
    /// The classifier's native short code, the ground-truth comparison key
    pub canonical: &'static str,
    /// Human-readable display name for reports
    pub name: &'static str,
}

/// Languages covered by both the Tatoeba exports and the pre-trained
/// fastText identification model. Corpus files outside this table are
/// never benchmarked.
const LANGUAGES: &[LanguageEntry] = &[
    entry("afr", "af", "Afrikaans"),
    entry("ara", "ar", "Arabic"),
    entry("aze", "az", "Azerbaijani"),
    entry("bak", "ba", "Bashkir"),
    entry("bel", "be", "Belarusian"),
    entry("ben", "bn", "Bengali"),
    entry("bos", "bs", "Bosnian"),
    entry("bre", "br", "Breton"),
    entry("bul", "bg", "Bulgarian"),
    entry("cat", "ca", "Catalan"),
    entry("ceb", "ceb", "Cebuano"),
    entry("ces", "cs", "Czech"),
    entry("chv", "cv", "Chuvash"),
    entry("cmn", "zh", "Mandarin Chinese"),
    entry("cym", "cy", "Welsh"),
    entry("dan", "da", "Danish"),
    entry("deu", "de", "German"),
    entry("ell", "el", "Greek"),
    entry("eng", "en", "English"),
    entry("epo", "eo", "Esperanto"),
    entry("est", "et", "Estonian"),
    entry("eus", "eu", "Basque"),
    entry("fas", "fa", "Persian"),
    entry("fin", "fi", "Finnish"),
    entry("fra", "fr", "French"),
    entry("fry", "fy", "Frisian"),
    entry("gle", "ga", "Irish"),
    entry("glg", "gl", "Galician"),
    entry("guj", "gu", "Gujarati"),
    entry("heb", "he", "Hebrew"),
    entry("hin", "hi", "Hindi"),
    entry("hrv", "hr", "Croatian"),
    entry("hun", "hu", "Hungarian"),
    entry("hye", "hy", "Armenian"),
    entry("ido", "io", "Ido"),
    entry("ina", "ia", "Interlingua"),
    entry("ind", "id", "Indonesian"),
    entry("isl", "is", "Icelandic"),
    entry("ita", "it", "Italian"),
    entry("jav", "jv", "Javanese"),
    entry("jpn", "ja", "Japanese"),
    entry("kan", "kn", "Kannada"),
    entry("kat", "ka", "Georgian"),
    entry("kaz", "kk", "Kazakh"),
    entry("khm", "km", "Khmer"),
    entry("kor", "ko", "Korean"),
    entry("kur", "ku", "Kurdish"),
    entry("lat", "la", "Latin"),
    entry("lav", "lv", "Latvian"),
    entry("lit", "lt", "Lithuanian"),
    entry("ltz", "lb", "Luxembourgish"),
    entry("mal", "ml", "Malayalam"),
    entry("mar", "mr", "Marathi"),
    entry("mkd", "mk", "Macedonian"),
    entry("mlt", "mt", "Maltese"),
    entry("mon", "mn", "Mongolian"),
    entry("mya", "my", "Burmese"),
    entry("nep", "ne", "Nepali"),
    entry("nld", "nl", "Dutch"),
    entry("nob", "no", "Norwegian Bokmal"),
    entry("oci", "oc", "Occitan"),
    entry("pan", "pa", "Punjabi"),
    entry("pol", "pl", "Polish"),
    entry("por", "pt", "Portuguese"),
    entry("ron", "ro", "Romanian"),
    entry("rus", "ru", "Russian"),
    entry("sin", "si", "Sinhala"),
    entry("slk", "sk", "Slovak"),
    entry("slv", "sl", "Slovenian"),
    entry("spa", "es", "Spanish"),
    entry("sqi", "sq", "Albanian"),
    entry("srp", "sr", "Serbian"),
    entry("swe", "sv", "Swedish"),
    entry("swh", "sw", "Swahili"),
    entry("tam", "ta", "Tamil"),
    entry("tat", "tt", "Tatar"),
    entry("tel", "te", "Telugu"),
    entry("tgl", "tl", "Tagalog"),
    entry("tha", "th", "Thai"),
    entry("tur", "tr", "Turkish"),
    entry("ukr", "uk", "Ukrainian"),
    entry("urd", "ur", "Urdu"),
    entry("uzb", "uz", "Uzbek"),
    entry("vie", "vi", "Vietnamese"),
    entry("yid", "yi", "Yiddish"),
    entry("yue", "yue", "Cantonese"),
];

const fn entry(
    corpus_code: &'static str,
    canonical: &'static str,
    name: &'static str,
) -> LanguageEntry {
    LanguageEntry {
        corpus_code,
        canonical,
        name,
    }
}

/// @ai:intent Lookup facade over the static language table
/// @ai:effects pure (stateless)
pub struct LanguageRegistry;

impl LanguageRegistry {
    /// @ai:intent All registered languages
    /// @ai:effects pure
    pub fn entries() -> &'static [LanguageEntry] {
        LANGUAGES
    }

    /// @ai:intent Find an entry by its corpus file code
    /// @ai:effects pure
    pub fn by_corpus_code(code: &str) -> Option<&'static LanguageEntry> {
        LANGUAGES.iter().find(|e| e.corpus_code == code)
    }

    /// @ai:intent Find an entry by its canonical classifier code
    /// @ai:effects pure
    pub fn by_canonical(code: &str) -> Option<&'static LanguageEntry> {
        LANGUAGES.iter().find(|e| e.canonical == code)
    }

    /// @ai:intent Resolve a canonical code to its display name
    /// @ai:post Err(UnknownLanguageCode) when the code is not registered
    /// @ai:effects pure
    pub fn display_name(canonical: &str) -> Result<&'static str> {
        Self::by_canonical(canonical)
            .map(|e| e.name)
            .ok_or_else(|| Error::UnknownLanguageCode(canonical.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_code_lookup() {
        let entry = LanguageRegistry::by_corpus_code("eng").unwrap();
        assert_eq!(entry.canonical, "en");
        assert_eq!(entry.name, "English");
    }

    #[test]
    fn test_display_name_for_registered_code() {
        assert_eq!(LanguageRegistry::display_name("fr").unwrap(), "French");
    }

    #[test]
    fn test_display_name_for_unknown_code_fails() {
        let err = LanguageRegistry::display_name("zz").unwrap_err();
        assert!(matches!(err, Error::UnknownLanguageCode(code) if code == "zz"));
    }

    #[test]
    fn test_no_duplicate_corpus_codes() {
        let mut codes: Vec<_> = LanguageRegistry::entries()
            .iter()
            .map(|e| e.corpus_code)
            .collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), LanguageRegistry::entries().len());
    }
}
