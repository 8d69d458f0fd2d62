use thiserror::Error;

pub type Result<T> = std::result::Result<T, Bip39Error>;

/// Everything that can go wrong while recovering a master secret.
///
/// Decoding itself can only produce the first three variants; the
/// acquisition variants belong to the wordlist download/load layer and are
/// never surfaced from a decode call.
#[derive(Error, Debug)]
pub enum Bip39Error {
    #[error("Unsupported mnemonic length: {0} words. Only 12 and 24 words are supported")]
    UnsupportedWordCount(usize),

    #[error("Word '{word}' at position {position} not found in wordlist")]
    UnknownWord { word: String, position: usize },

    #[error("Invalid wordlist: {0}")]
    InvalidWordlist(String),

    #[error("Unsupported language: '{0}'")]
    UnsupportedLanguage(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Network error: {0}")]
    NetworkError(String),
}
