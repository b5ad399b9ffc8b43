//! Permuterm Index - CLI
//!
//! Builds a permuterm trie index from a word-list file, then answers
//! exact and wildcard queries read from standard input.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use permuterm_index::{commands::run_repl, index::PermutermIndex, wordlist::load_from_file};

#[derive(Parser)]
#[command(
    name = "permuterm_index",
    about = "Permuterm trie index with exact and wildcard word search",
    version,
    author
)]
struct Cli {
    /// Word-list file: whitespace-separated words to index
    file: PathBuf,
}

fn main() -> Result<()> {
    let cli = parse_cli();

    let words = load_from_file(&cli.file)
        .with_context(|| format!("File open error: {}", cli.file.display()))?;
    let index = PermutermIndex::from_words(&words);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_repl(&index, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Parse the command line.
///
/// Argument errors print the usage message and exit with code 1;
/// `--help` and `--version` exit with code 0.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = i32::from(err.use_stderr());
            let _ = err.print();
            std::process::exit(code);
        }
    }
}
