use crate::{
    entropy::{Entropy, WordCount},
    error::{Bip39Error, Result},
    wordlist::Wordlist,
};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A 12 or 24 word mnemonic phrase, held as the exact tokens supplied by the
/// caller.
///
/// Words are opaque and case sensitive; any whitespace or Unicode
/// normalization concern belongs to whoever tokenized the input.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic {
    words: Vec<String>,
    #[zeroize(skip)]
    count: WordCount,
}

impl Mnemonic {
    /// Accepts an ordered word sequence. Only lengths 12 and 24 are valid;
    /// the words themselves are checked later, against a concrete wordlist.
    pub fn from_words(words: Vec<String>) -> Result<Self> {
        let count = WordCount::from_count(words.len())?;
        Ok(Mnemonic { words, count })
    }

    /// Whitespace-tokenizing convenience for phrase input.
    pub fn from_phrase(phrase: &str) -> Result<Self> {
        let words: Vec<String> = phrase.split_whitespace().map(|w| w.to_string()).collect();
        Self::from_words(words)
    }

    /// Recovers the master secret this mnemonic encodes.
    ///
    /// Each word resolves to its 11-bit wordlist index (failing with the
    /// word and its 0-based position if absent, with no partial result),
    /// the indexes concatenate MSB-first into one bit string, and the
    /// trailing checksum bits are dropped before the bits are packed into
    /// bytes. The checksum is discarded, not verified.
    pub fn to_entropy(&self, wordlist: &Wordlist) -> Result<Entropy> {
        let mut bits = Vec::with_capacity(self.count.total_bits());
        for (position, word) in self.words.iter().enumerate() {
            let index = wordlist
                .index_of(word)
                .ok_or_else(|| Bip39Error::UnknownWord {
                    word: word.clone(),
                    position,
                })?;

            for i in (0..11).rev() {
                bits.push((index >> i) & 1 == 1);
            }
        }

        let entropy_bits = self.count.entropy_bits();

        // 128 and 256 are byte multiples, so the truncated bit string packs
        // exactly; truncating here, before any numeric conversion, is what
        // keeps leading zero bits intact.
        let mut data = Vec::with_capacity(self.count.byte_count());
        for chunk in bits[..entropy_bits].chunks_exact(8) {
            let mut byte = 0u8;
            for (i, &bit) in chunk.iter().enumerate() {
                if bit {
                    byte |= 1 << (7 - i);
                }
            }
            data.push(byte);
        }

        Ok(Entropy::new(self.count, data))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn count(&self) -> WordCount {
        self.count
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("word_count", &self.word_count())
            .field("words", &"<REDACTED>")
            .finish()
    }
}
