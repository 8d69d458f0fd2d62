use crate::error::{Bip39Error, Result};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Supported mnemonic sizes.
///
/// BIP-39 also defines 15, 18 and 21 word phrases; this tool deliberately
/// supports only the two most common sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCount {
    Words12 = 12,
    Words24 = 24,
}

impl WordCount {
    pub fn from_count(words: usize) -> Result<Self> {
        match words {
            12 => Ok(WordCount::Words12),
            24 => Ok(WordCount::Words24),
            other => Err(Bip39Error::UnsupportedWordCount(other)),
        }
    }

    pub fn count(&self) -> usize {
        *self as usize
    }

    /// Raw bits contributed by the words: 11 per word.
    pub fn total_bits(&self) -> usize {
        self.count() * 11
    }

    /// Trailing checksum bits to discard: one per three words.
    pub fn checksum_bits(&self) -> usize {
        self.count() / 3
    }

    pub fn entropy_bits(&self) -> usize {
        self.total_bits() - self.checksum_bits()
    }

    pub fn byte_count(&self) -> usize {
        self.entropy_bits() / 8
    }

    /// Length of the recovered secret in hex characters.
    pub fn hex_len(&self) -> usize {
        self.entropy_bits() / 4
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} words ({} bits)", self.count(), self.entropy_bits())
    }
}

/// The recovered master secret.
///
/// Held as raw bytes so the hex rendering is always fixed width; the
/// checksum bits have already been stripped at this point.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Entropy {
    #[zeroize(skip)]
    count: WordCount,
    data: Vec<u8>,
}

impl Entropy {
    pub(crate) fn new(count: WordCount, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), count.byte_count());
        Entropy { count, data }
    }

    pub fn word_count(&self) -> WordCount {
        self.count
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Lowercase hex, no prefix, exactly 32 or 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.data)
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entropy")
            .field("count", &self.count)
            .field("data", &"<REDACTED>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_quantities() {
        assert_eq!(WordCount::Words12.checksum_bits(), 4);
        assert_eq!(WordCount::Words12.entropy_bits(), 128);
        assert_eq!(WordCount::Words12.hex_len(), 32);
        assert_eq!(WordCount::Words24.checksum_bits(), 8);
        assert_eq!(WordCount::Words24.entropy_bits(), 256);
        assert_eq!(WordCount::Words24.hex_len(), 64);
    }

    #[test]
    fn test_unsupported_counts() {
        for count in [0, 1, 11, 13, 15, 18, 21, 25] {
            match WordCount::from_count(count) {
                Err(Bip39Error::UnsupportedWordCount(got)) => assert_eq!(got, count),
                other => panic!("expected UnsupportedWordCount, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_hex_keeps_leading_zeros() {
        let mut data = vec![0u8; 16];
        data[15] = 0x01;
        let entropy = Entropy::new(WordCount::Words12, data);
        assert_eq!(entropy.to_hex(), "00000000000000000000000000000001");
    }

    #[test]
    fn test_hex_width() {
        let entropy = Entropy::new(WordCount::Words24, vec![0xab; 32]);
        let hex = entropy.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(hex, "ab".repeat(32));
    }
}
