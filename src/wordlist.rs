//! Word-list file loading
//!
//! The build-phase input is a plain text file of whitespace-separated
//! tokens. Every token becomes one dictionary word; tokens with
//! out-of-alphabet characters are not filtered here, the trie rejects
//! their permuterms at insert time.

use std::fs;
use std::io;
use std::path::Path;

/// Load the word tokens of a file, in file order.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use permuterm_index::wordlist::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(tokenize(&content))
}

/// Split file content into word tokens on any whitespace.
#[must_use]
pub fn tokenize(content: &str) -> Vec<String> {
    content.split_whitespace().map(str::to_string).collect()
}
