use crate::error::{Bip39Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::str::FromStr;

/// Languages with a published BIP-39 wordlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Japanese,
    Korean,
    Spanish,
    ChineseSimplified,
    ChineseTraditional,
    French,
    Italian,
    Czech,
}

impl Language {
    pub fn name(&self) -> &str {
        match self {
            Language::English => "English",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Spanish => "Spanish",
            Language::ChineseSimplified => "Chinese (Simplified)",
            Language::ChineseTraditional => "Chinese (Traditional)",
            Language::French => "French",
            Language::Italian => "Italian",
            Language::Czech => "Czech",
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Language::English => "en",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Spanish => "es",
            Language::ChineseSimplified => "zh-hans",
            Language::ChineseTraditional => "zh-hant",
            Language::French => "fr",
            Language::Italian => "it",
            Language::Czech => "cs",
        }
    }

    /// File stem used by the upstream bips repository for this wordlist.
    pub fn file_stem(&self) -> &str {
        match self {
            Language::English => "english",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Spanish => "spanish",
            Language::ChineseSimplified => "chinese_simplified",
            Language::ChineseTraditional => "chinese_traditional",
            Language::French => "french",
            Language::Italian => "italian",
            Language::Czech => "czech",
        }
    }
}

impl FromStr for Language {
    type Err = Bip39Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "japanese" | "ja" => Ok(Language::Japanese),
            "korean" | "ko" => Ok(Language::Korean),
            "spanish" | "es" => Ok(Language::Spanish),
            "chinese_simplified" | "zh-hans" => Ok(Language::ChineseSimplified),
            "chinese_traditional" | "zh-hant" => Ok(Language::ChineseTraditional),
            "french" | "fr" => Ok(Language::French),
            "italian" | "it" => Ok(Language::Italian),
            "czech" | "cs" => Ok(Language::Czech),
            _ => Err(Bip39Error::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Immutable word -> index mapping for one language.
///
/// Index 0 is the first list entry; word position in the list is its 11-bit
/// value in a mnemonic.
#[derive(Debug, Clone)]
pub struct Wordlist {
    language: Language,
    words: Vec<String>,
    word_to_index: HashMap<String, u16>,
}

impl Wordlist {
    /// Builds the mapping from an ordered list of exactly 2048 distinct words.
    pub fn from_words(words: Vec<String>, language: Language) -> Result<Self> {
        if words.len() != 2048 {
            return Err(Bip39Error::InvalidWordlist(format!(
                "expected 2048 words, found {}",
                words.len()
            )));
        }

        let mut word_to_index = HashMap::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            if word_to_index.insert(word.clone(), i as u16).is_some() {
                return Err(Bip39Error::InvalidWordlist(format!(
                    "duplicate word '{}' at index {}",
                    word, i
                )));
            }
        }

        Ok(Wordlist {
            language,
            words,
            word_to_index,
        })
    }

    /// Parses a one-word-per-line wordlist file.
    pub fn from_str(content: &str, language: Language) -> Result<Self> {
        let words: Vec<String> = content
            .lines()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        Self::from_words(words, language)
    }

    pub fn get_word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(|s| s.as_str())
    }

    /// Exact-match lookup; no case folding or normalization.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.word_to_index.get(word).copied()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

static WORDLISTS: Lazy<HashMap<Language, Wordlist>> = Lazy::new(|| {
    let mut map = HashMap::new();

    let english_words = include_str!("../data/wordlists/english.txt");

    if let Ok(wordlist) = Wordlist::from_str(english_words, Language::English) {
        map.insert(Language::English, wordlist);
    }

    map
});

impl Wordlist {
    /// Returns the wordlist shipped with the crate, if one exists for the
    /// language. Only English is bundled; other languages go through the
    /// acquisition layer.
    pub fn bundled(language: Language) -> Option<&'static Wordlist> {
        WORDLISTS.get(&language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic_words(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("word{:04}", i)).collect()
    }

    #[test]
    fn test_build_and_lookup() {
        let wordlist = Wordlist::from_words(synthetic_words(2048), Language::English).unwrap();
        assert_eq!(wordlist.index_of("word0000"), Some(0));
        assert_eq!(wordlist.index_of("word2047"), Some(2047));
        assert_eq!(wordlist.get_word(42), Some("word0042"));
        assert_eq!(wordlist.index_of("missing"), None);
    }

    #[test]
    fn test_wrong_count_rejected() {
        for count in [0, 2047, 2049] {
            let result = Wordlist::from_words(synthetic_words(count), Language::English);
            assert!(matches!(result, Err(Bip39Error::InvalidWordlist(_))));
        }
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut words = synthetic_words(2048);
        words[100] = "word0099".to_string();
        let result = Wordlist::from_words(words, Language::English);
        assert!(matches!(result, Err(Bip39Error::InvalidWordlist(_))));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let wordlist = Wordlist::bundled(Language::English).unwrap();
        assert_eq!(wordlist.index_of("abandon"), Some(0));
        assert_eq!(wordlist.index_of("Abandon"), None);
        assert_eq!(wordlist.index_of("abandon "), None);
    }

    #[test]
    fn test_bundled_english() {
        let wordlist = Wordlist::bundled(Language::English).unwrap();
        assert_eq!(wordlist.words().len(), 2048);
        assert_eq!(wordlist.index_of("abandon"), Some(0));
        assert_eq!(wordlist.index_of("zoo"), Some(2047));
        assert_eq!(wordlist.index_of("jaguar"), Some(953));
        assert!(Wordlist::bundled(Language::Czech).is_none());
    }

    #[test]
    fn test_from_str_skips_blank_lines() {
        let content = synthetic_words(2048).join("\n") + "\n\n";
        let wordlist = Wordlist::from_str(&content, Language::French).unwrap();
        assert_eq!(wordlist.words().len(), 2048);
        assert_eq!(wordlist.language(), Language::French);
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert_eq!(
            "zh-hans".parse::<Language>().unwrap(),
            Language::ChineseSimplified
        );
        assert!(matches!(
            "klingon".parse::<Language>(),
            Err(Bip39Error::UnsupportedLanguage(_))
        ));
    }
}
