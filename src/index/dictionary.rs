//! Append-only word dictionary
//!
//! Stores every build-phase word in insertion order; the 0-based position
//! is the word's dictionary index and never changes once assigned. The
//! trie stores these indices, the dictionary is the source of truth for
//! printing.

/// Ordered, append-only sequence of the original input words.
#[derive(Debug, Default)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the next appended word will receive.
    #[inline]
    #[must_use]
    pub fn next_index(&self) -> usize {
        self.words.len()
    }

    /// Append a word, returning its assigned index.
    ///
    /// Duplicates are appended like any other word; the dictionary may
    /// hold entries the trie never points at.
    pub fn push(&mut self, word: impl Into<String>) -> usize {
        let index = self.words.len();
        self.words.push(word.into());
        index
    }

    /// Look up a word by dictionary index.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Number of stored words.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
