//! Wordlist acquisition.
//!
//! The decoder itself never performs I/O; this layer materializes a
//! [`Wordlist`] from a local file, a cached download, or the upstream bips
//! repository, and hands it over fully validated.

use crate::error::{Bip39Error, Result};
use crate::wordlist::{Language, Wordlist};
use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

/// Raw wordlist files published in the bips repository.
pub const WORDLIST_URL_BASE: &str =
    "https://raw.githubusercontent.com/bitcoin/bips/master/bip-0039";

const DOWNLOAD_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(3);

/// Upstream URL for a language's wordlist file.
pub fn wordlist_url(language: Language) -> String {
    format!("{}/{}.txt", WORDLIST_URL_BASE, language.file_stem())
}

/// Reads a wordlist from a local file.
pub fn load_file(path: &Path, language: Language) -> Result<Wordlist> {
    let content = fs::read_to_string(path)?;
    Wordlist::from_str(&content, language)
}

/// Downloads the wordlist for a language, retrying a bounded number of
/// times with a pause between attempts. Transport failures never escape as
/// decode errors.
pub fn download(language: Language) -> Result<Wordlist> {
    let url = wordlist_url(language);
    let mut last_error = String::new();

    for attempt in 1..=DOWNLOAD_ATTEMPTS {
        match try_download(&url) {
            Ok(content) => return Wordlist::from_str(&content, language),
            Err(e) => {
                last_error = e;
                if attempt < DOWNLOAD_ATTEMPTS {
                    thread::sleep(RETRY_DELAY);
                }
            }
        }
    }

    Err(Bip39Error::NetworkError(format!(
        "failed to download {} after {} attempts: {}",
        url, DOWNLOAD_ATTEMPTS, last_error
    )))
}

fn try_download(url: &str) -> std::result::Result<String, String> {
    reqwest::blocking::get(url)
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.text())
        .map_err(|e| e.to_string())
}

/// Returns the cached wordlist from `cache_dir` if present, otherwise
/// downloads it and writes the cache file before returning.
pub fn load_or_fetch(language: Language, cache_dir: &Path) -> Result<Wordlist> {
    let cache_path = cache_dir.join(format!("{}.txt", language.file_stem()));

    if cache_path.exists() {
        return load_file(&cache_path, language);
    }

    let wordlist = download(language)?;

    // A failed cache write is not worth failing the run over; the list is
    // already in hand.
    let _ = fs::write(&cache_path, wordlist.words().join("\n") + "\n");

    Ok(wordlist)
}
