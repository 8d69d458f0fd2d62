#![forbid(unsafe_code)]

use bip39_secret::{fetch, Bip39Error, Language, Mnemonic, Wordlist};
use clap::Parser;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bip39-secret")]
#[command(about = "Recover the BIP-39 master secret from a mnemonic phrase", long_about = None)]
#[command(version)]
struct Cli {
    /// The 12 or 24 mnemonic words (prompted for interactively when omitted)
    #[arg(value_name = "WORD")]
    words: Vec<String>,

    /// Wordlist language (english, japanese, korean, spanish,
    /// chinese_simplified, chinese_traditional, french, italian, czech)
    #[arg(short, long, default_value = "english")]
    language: String,

    /// Local wordlist file (2048 words, one per line); skips download
    #[arg(short, long)]
    wordlist: Option<PathBuf>,

    /// Ignore any cached wordlist file and download a fresh copy
    #[arg(long)]
    no_cache: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("\n❌ {} {}", "ERROR:".red().bold(), e.to_string().red());
        std::process::exit(exit_code(&e));
    }
}

/// One exit code per failure kind, so scripts can tell a typo from a
/// network problem.
fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<Bip39Error>() {
        Some(Bip39Error::UnsupportedWordCount(_)) => 2,
        Some(Bip39Error::UnknownWord { .. }) => 3,
        Some(Bip39Error::InvalidWordlist(_)) | Some(Bip39Error::UnsupportedLanguage(_)) => 4,
        Some(Bip39Error::IoError(_)) | Some(Bip39Error::NetworkError(_)) => 5,
        None => 1,
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    println!("\n{}", "🔐 BIP-39 Master Secret Recovery".cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    let language: Language = cli.language.parse::<Language>()?;

    let words = if cli.words.is_empty() {
        let phrase: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter your mnemonic phrase")
            .interact_text()?;
        phrase.split_whitespace().map(String::from).collect()
    } else {
        cli.words
    };

    let mnemonic = Mnemonic::from_words(words)?;
    let wordlist = resolve_wordlist(&cli.wordlist, language, cli.no_cache)?;
    let entropy = mnemonic.to_entropy(&wordlist)?;
    let secret = entropy.to_hex();

    println!(
        "\n✅ {} Decoded {} words ({} wordlist)",
        "SUCCESS:".green().bold(),
        mnemonic.word_count(),
        wordlist.language().name()
    );

    println!("\n{}", "🔑 MASTER SECRET (KEEP SAFE!)".yellow().bold());
    println!("{}", "─".repeat(50).yellow());
    println!("{}", secret.cyan().bold());

    println!("\nverify with command:\n");
    println!("    bx mnemonic-new {}", secret);

    Ok(())
}

/// Wordlist resolution order: explicit file, bundled list, cache/download.
fn resolve_wordlist(
    file: &Option<PathBuf>,
    language: Language,
    no_cache: bool,
) -> anyhow::Result<Wordlist> {
    if let Some(path) = file {
        return Ok(fetch::load_file(path, language)?);
    }

    if !no_cache {
        if let Some(bundled) = Wordlist::bundled(language) {
            return Ok(bundled.clone());
        }
    }

    println!(
        "{}",
        format!("Fetching {} wordlist...", language.name()).white().dimmed()
    );

    let wordlist = if no_cache {
        fetch::download(language)?
    } else {
        fetch::load_or_fetch(language, &env::current_dir()?)?
    };

    Ok(wordlist)
}
