#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Recover the master secret (entropy) encoded in a BIP-39 mnemonic phrase.
//!
//! A mnemonic word is an 11-bit index into a 2048-word list; this crate
//! reverses that encoding for 12 and 24 word phrases, discarding the
//! trailing checksum bits, and renders the secret as fixed-width lowercase
//! hex. The forward direction (entropy to mnemonic), checksum verification
//! and seed derivation are out of scope.

pub mod entropy;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod mnemonic;
pub mod wordlist;

pub use entropy::{Entropy, WordCount};
pub use error::{Bip39Error, Result};
pub use mnemonic::Mnemonic;
pub use wordlist::{Language, Wordlist};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    pub use crate::{Bip39Error, Entropy, Language, Mnemonic, Result, WordCount, Wordlist};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }
}
