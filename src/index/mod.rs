//! The permuterm index: trie store, dictionary and builder
//!
//! Built once from a word list, read-only afterwards. Every word
//! contributes all rotations of `word + '$'` to the trie, each tagged
//! with the word's dictionary index, so wildcard queries become prefix
//! enumerations over some rotation.

mod dictionary;
mod trie;

pub use dictionary::Dictionary;
pub use trie::{InsertOutcome, TrieNode};

use crate::core::make_permuterms;

/// A built permuterm index over a word list.
pub struct PermutermIndex {
    root: TrieNode,
    dictionary: Dictionary,
}

impl Default for PermutermIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PermutermIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            dictionary: Dictionary::new(),
        }
    }

    /// Build an index from a sequence of word tokens.
    ///
    /// # Examples
    /// ```
    /// use permuterm_index::index::PermutermIndex;
    ///
    /// let index = PermutermIndex::from_words(["cat", "car", "dog"]);
    /// assert_eq!(index.lookup_exact("cat"), Some("cat"));
    /// assert_eq!(index.word_count(), 3);
    /// ```
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut index = Self::new();
        for word in words {
            index.add_word(word.as_ref());
        }
        index
    }

    /// Add one word to the index, returning its dictionary index.
    ///
    /// Every permuterm of the word is inserted independently; an insert
    /// rejected as a duplicate or for an out-of-alphabet character does
    /// not stop the remaining permuterms. The word joins the dictionary
    /// unconditionally, so a fully rejected word still occupies an index
    /// (unreachable via search).
    pub fn add_word(&mut self, word: &str) -> usize {
        let index = self.dictionary.next_index();
        for permuterm in make_permuterms(word) {
            let _ = self.root.insert(&permuterm, index);
        }
        self.dictionary.push(word)
    }

    /// Exact lookup, resolving to the stored dictionary word.
    ///
    /// The returned word keeps its original case even when the query was
    /// cased differently.
    #[must_use]
    pub fn lookup_exact(&self, word: &str) -> Option<&str> {
        self.root
            .search(word)
            .and_then(|index| self.dictionary.get(index))
    }

    /// All dictionary words whose permuterm paths extend `trie_path`,
    /// in trie enumeration order.
    #[must_use]
    pub fn words_under(&self, trie_path: &str) -> Vec<&str> {
        self.root
            .prefix_indices(trie_path)
            .into_iter()
            .filter_map(|index| self.dictionary.get(index))
            .collect()
    }

    /// The word stored at a dictionary index.
    #[must_use]
    pub fn word(&self, index: usize) -> Option<&str> {
        self.dictionary.get(index)
    }

    /// Number of dictionary entries (including unreachable duplicates).
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.dictionary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_resolve_to_their_first_occurrence() {
        let index = PermutermIndex::from_words(["cat", "car", "dog"]);
        assert_eq!(index.lookup_exact("cat"), Some("cat"));
        assert_eq!(index.lookup_exact("car"), Some("car"));
        assert_eq!(index.lookup_exact("dog"), Some("dog"));
        assert_eq!(index.lookup_exact("bird"), None);
    }

    #[test]
    fn duplicate_word_keeps_first_index_but_both_entries() {
        let mut index = PermutermIndex::new();
        assert_eq!(index.add_word("cat"), 0);
        assert_eq!(index.add_word("cat"), 1);
        // Both occurrences are in the dictionary, only the first is
        // reachable through the trie.
        assert_eq!(index.word_count(), 2);
        assert_eq!(index.word(1), Some("cat"));
        assert_eq!(index.lookup_exact("cat"), Some("cat"));
        assert_eq!(index.words_under("cat$"), vec!["cat"]);
    }

    #[test]
    fn invalid_word_still_occupies_a_dictionary_index() {
        let mut index = PermutermIndex::new();
        index.add_word("don't");
        index.add_word("cat");
        assert_eq!(index.word_count(), 2);
        assert_eq!(index.lookup_exact("don't"), None);
        // The valid word got index 1 and remains reachable.
        assert_eq!(index.word(1), Some("cat"));
        assert_eq!(index.lookup_exact("cat"), Some("cat"));
    }

    #[test]
    fn rotated_prefix_finds_suffix_matches() {
        let index = PermutermIndex::from_words(["cat", "car", "dog"]);
        // "at$" is the rotation selecting words ending in "at".
        assert_eq!(index.words_under("at$"), vec!["cat"]);
    }

    #[test]
    fn stored_case_survives_lookup() {
        let index = PermutermIndex::from_words(["Cat"]);
        assert_eq!(index.lookup_exact("cat"), Some("Cat"));
    }
}
