//! The 27-symbol trie alphabet
//!
//! Trie edges are labeled with lowercase ASCII letters plus a single
//! end-of-word marker. Each symbol maps to a fixed child slot: `a..z`
//! occupy slots 0-25 and the end marker occupies the last slot, so a
//! pre-order walk over slots visits letters first and the marker last.

/// Sentinel appended to a word before rotation, marking the original
/// word's end within a permuterm.
pub const END_MARKER: char = '$';

/// Number of child slots per trie node: 26 letters plus the end marker.
pub const ALPHABET_SIZE: usize = 27;

/// Child slot of the end marker (the last slot).
pub(crate) const END_SLOT: usize = ALPHABET_SIZE - 1;

/// Map a character to its trie child slot.
///
/// ASCII letters are normalized to lowercase first. Returns `None` for
/// any character outside `a-z`, `A-Z` and the end marker.
///
/// # Examples
/// ```
/// use permuterm_index::core::symbol_slot;
///
/// assert_eq!(symbol_slot('a'), Some(0));
/// assert_eq!(symbol_slot('Z'), Some(25));
/// assert_eq!(symbol_slot('$'), Some(26));
/// assert_eq!(symbol_slot('3'), None);
/// ```
#[must_use]
pub fn symbol_slot(ch: char) -> Option<usize> {
    match ch.to_ascii_lowercase() {
        lower @ 'a'..='z' => Some((u32::from(lower) - u32::from('a')) as usize),
        END_MARKER => Some(END_SLOT),
        _ => None,
    }
}

/// Map a whole path to child slots, or `None` if any character is
/// outside the alphabet.
///
/// Used to validate a path in full before any trie mutation.
pub(crate) fn path_slots(path: &str) -> Option<Vec<usize>> {
    path.chars().map(symbol_slot).collect()
}
