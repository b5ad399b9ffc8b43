//! Query execution
//!
//! Classifies a token, rewrites wildcards into a rotated trie prefix and
//! resolves the resulting dictionary indices back to words. Queries
//! never mutate the index.

use super::pattern::QueryPattern;
use crate::index::PermutermIndex;

/// The outcome of one query token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome<'a> {
    /// Exact search hit; carries the stored dictionary word.
    ExactHit(&'a str),
    /// Exact search miss.
    ExactMiss,
    /// Wildcard search; the matching words in trie enumeration order
    /// (possibly empty).
    Matches(Vec<&'a str>),
    /// The token's wildcard form is outside the supported cases.
    Unsupported,
}

/// Execute one query token against a built index.
///
/// # Examples
/// ```
/// use permuterm_index::index::PermutermIndex;
/// use permuterm_index::query::{QueryOutcome, run_query};
///
/// let index = PermutermIndex::from_words(["cat", "car", "dog"]);
/// assert_eq!(run_query(&index, "cat"), QueryOutcome::ExactHit("cat"));
/// assert_eq!(run_query(&index, "ca*"), QueryOutcome::Matches(vec!["car", "cat"]));
/// ```
#[must_use]
pub fn run_query<'a>(index: &'a PermutermIndex, token: &str) -> QueryOutcome<'a> {
    let pattern = QueryPattern::parse(token);
    match &pattern {
        QueryPattern::Exact(word) => index
            .lookup_exact(word)
            .map_or(QueryOutcome::ExactMiss, QueryOutcome::ExactHit),
        QueryPattern::Unsupported => QueryOutcome::Unsupported,
        _ => match pattern.trie_path() {
            Some(path) => QueryOutcome::Matches(index.words_under(&path)),
            None => QueryOutcome::Unsupported,
        },
    }
}
