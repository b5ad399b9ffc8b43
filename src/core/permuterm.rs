//! Permuterm generation
//!
//! A permuterm of a word is a cyclic rotation of `word + '$'`. Indexing
//! every rotation lets any single-wildcard query be rewritten into a
//! prefix search over one of the rotations.

use super::symbol::END_MARKER;

/// Generate all permuterms of `word`, in rotation order.
///
/// Returns exactly `len + 1` strings, each of length `len + 1` (in
/// characters): the unrotated `word + '$'` first, then each successive
/// left rotation. Case is preserved; normalization happens at the trie
/// boundary.
///
/// # Examples
/// ```
/// use permuterm_index::core::make_permuterms;
///
/// let perms = make_permuterms("abc");
/// assert_eq!(perms, vec!["abc$", "bc$a", "c$ab", "$abc"]);
/// ```
#[must_use]
pub fn make_permuterms(word: &str) -> Vec<String> {
    let mut rotation: Vec<char> = word.chars().collect();
    rotation.push(END_MARKER);

    let mut permuterms = Vec::with_capacity(rotation.len());
    for _ in 0..rotation.len() {
        permuterms.push(rotation.iter().collect());
        rotation.rotate_left(1);
    }
    permuterms
}
