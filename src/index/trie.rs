//! 27-ary prefix trie over permuterms
//!
//! Each node owns up to 27 children (one per alphabet symbol, end marker
//! in the last slot) and optionally carries the dictionary index of the
//! word whose permuterm terminates there. Dropping the root tears down
//! the whole tree.

use crate::core::{ALPHABET_SIZE, END_SLOT, path_slots};

/// Result of a trie insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The path was stored and its terminal node now carries the index.
    Inserted,
    /// The path contained a symbol outside the alphabet, or its terminal
    /// node already carried an index (first writer wins).
    Rejected,
}

impl InsertOutcome {
    /// Whether the insertion took effect.
    #[inline]
    #[must_use]
    pub const fn is_inserted(self) -> bool {
        matches!(self, Self::Inserted)
    }
}

/// A node of the permuterm trie.
///
/// The root represents the empty path. Child slots are ordered `a..z`
/// then the end marker; enumeration follows that slot order, so results
/// come out in rotation order rather than alphabetical word order.
#[derive(Debug)]
pub struct TrieNode {
    index: Option<usize>,
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieNode {
    /// Create an empty node: no terminal index, no children.
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: None,
            children: std::array::from_fn(|_| None),
        }
    }

    /// Insert `path` below this node, tagging its terminal node with
    /// `index`.
    ///
    /// The whole path is validated before any mutation: a symbol outside
    /// the alphabet rejects the call without touching the tree. ASCII
    /// letters are lowercased while walking. If the terminal node already
    /// carries an index the call is rejected and the existing index is
    /// kept.
    pub fn insert(&mut self, path: &str, index: usize) -> InsertOutcome {
        let Some(slots) = path_slots(path) else {
            return InsertOutcome::Rejected;
        };

        let mut node = self;
        for slot in slots {
            node = node.children[slot].get_or_insert_with(|| Box::new(TrieNode::new()));
        }

        if node.index.is_some() {
            return InsertOutcome::Rejected;
        }
        node.index = Some(index);
        InsertOutcome::Inserted
    }

    /// Exact word lookup.
    ///
    /// Walks `word` lowercased, then requires an end-marker child with a
    /// terminal index. Missing edges and out-of-alphabet symbols both
    /// resolve to `None`.
    #[must_use]
    pub fn search(&self, word: &str) -> Option<usize> {
        let slots = path_slots(word)?;

        let mut node = self;
        for slot in slots {
            node = node.children[slot].as_deref()?;
        }
        node.children[END_SLOT].as_deref()?.index
    }

    /// All terminal indices below the node reached by walking `prefix`.
    ///
    /// Returns an empty vector if any edge along `prefix` is missing or
    /// `prefix` contains an out-of-alphabet symbol. The subtree is
    /// visited pre-order: a node's own index first, then its children in
    /// slot order (`a..z`, end marker last). Repeating the same call on
    /// an unmodified trie yields an identical sequence.
    #[must_use]
    pub fn prefix_indices(&self, prefix: &str) -> Vec<usize> {
        let Some(slots) = path_slots(prefix) else {
            return Vec::new();
        };

        let mut node = self;
        for slot in slots {
            match node.children[slot].as_deref() {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }

        let mut indices = Vec::new();
        node.collect_subtree(&mut indices);
        indices
    }

    fn collect_subtree(&self, out: &mut Vec<usize>) {
        if let Some(index) = self.index {
            out.push(index);
        }
        for child in self.children.iter().flatten() {
            child.collect_subtree(out);
        }
    }
}
