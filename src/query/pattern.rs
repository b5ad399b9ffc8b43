//! Wildcard query classification
//!
//! A query token is classified by the position of its `*` wildcard, then
//! rewritten into a trie path so every supported form becomes a single
//! prefix enumeration over some rotation.

use crate::core::END_MARKER;

/// Wildcard character accepted in query tokens.
pub const WILDCARD: char = '*';

/// A classified query token, lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPattern {
    /// No wildcard: exact word lookup.
    Exact(String),
    /// `p*`: words starting with `p`.
    Prefix(String),
    /// `*s`: words ending with `s`.
    Suffix(String),
    /// `l*r`: words starting with `l` and ending with `r`.
    Infix { left: String, right: String },
    /// `*m*`: rewritten to a plain, unrotated prefix walk on `m`.
    ///
    /// Since every rotation of each word is indexed, this matches words
    /// containing `m` at any position that does not cross the end
    /// marker, not just words starting with `m`.
    Substring(String),
    /// Bare `*`, doubled wildcards, or any other form outside the four
    /// supported cases.
    Unsupported,
}

impl QueryPattern {
    /// Classify a raw query token.
    ///
    /// The token is lowercased before classification, mirroring the
    /// trie's own normalization.
    ///
    /// # Examples
    /// ```
    /// use permuterm_index::query::QueryPattern;
    ///
    /// assert_eq!(QueryPattern::parse("cat"), QueryPattern::Exact("cat".into()));
    /// assert_eq!(QueryPattern::parse("ca*"), QueryPattern::Prefix("ca".into()));
    /// assert_eq!(QueryPattern::parse("*"), QueryPattern::Unsupported);
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let token = token.to_lowercase();
        let wildcards = token.matches(WILDCARD).count();

        match wildcards {
            0 => Self::Exact(token),
            1 if token == "*" => Self::Unsupported,
            1 => {
                // The wildcard is one byte, so slicing around it is safe
                // even for non-ASCII tokens.
                let Some(at) = token.find(WILDCARD) else {
                    return Self::Unsupported;
                };
                if at == 0 {
                    Self::Suffix(token[1..].to_string())
                } else if at == token.len() - 1 {
                    Self::Prefix(token[..at].to_string())
                } else {
                    Self::Infix {
                        left: token[..at].to_string(),
                        right: token[at + 1..].to_string(),
                    }
                }
            }
            2 if token.len() > 2 && token.starts_with(WILDCARD) && token.ends_with(WILDCARD) => {
                Self::Substring(token[1..token.len() - 1].to_string())
            }
            _ => Self::Unsupported,
        }
    }

    /// The trie path whose prefix enumeration answers this pattern, or
    /// `None` for exact and unsupported patterns.
    ///
    /// Each wildcard form selects the rotation that turns it into a
    /// prefix: `p*` → `$p`, `*s` → `s$`, `l*r` → `r$l`. The substring
    /// form stays unrotated.
    #[must_use]
    pub fn trie_path(&self) -> Option<String> {
        match self {
            Self::Prefix(prefix) => Some(format!("{END_MARKER}{prefix}")),
            Self::Suffix(suffix) => Some(format!("{suffix}{END_MARKER}")),
            Self::Infix { left, right } => Some(format!("{right}{END_MARKER}{left}")),
            Self::Substring(middle) => Some(middle.clone()),
            Self::Exact(_) | Self::Unsupported => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_token_is_exact() {
        assert_eq!(QueryPattern::parse("cat"), QueryPattern::Exact("cat".into()));
    }

    #[test]
    fn classification_lowercases() {
        assert_eq!(QueryPattern::parse("CAT"), QueryPattern::Exact("cat".into()));
        assert_eq!(QueryPattern::parse("CA*"), QueryPattern::Prefix("ca".into()));
    }

    #[test]
    fn trailing_wildcard_is_prefix() {
        assert_eq!(QueryPattern::parse("ab*"), QueryPattern::Prefix("ab".into()));
        assert_eq!(
            QueryPattern::parse("ab*").trie_path(),
            Some("$ab".to_string())
        );
    }

    #[test]
    fn leading_wildcard_is_suffix() {
        assert_eq!(QueryPattern::parse("*ab"), QueryPattern::Suffix("ab".into()));
        assert_eq!(
            QueryPattern::parse("*ab").trie_path(),
            Some("ab$".to_string())
        );
    }

    #[test]
    fn middle_wildcard_is_infix() {
        assert_eq!(
            QueryPattern::parse("a*b"),
            QueryPattern::Infix {
                left: "a".into(),
                right: "b".into()
            }
        );
        assert_eq!(
            QueryPattern::parse("ab*on").trie_path(),
            Some("on$ab".to_string())
        );
    }

    #[test]
    fn both_sided_wildcard_is_substring() {
        assert_eq!(
            QueryPattern::parse("*and*"),
            QueryPattern::Substring("and".into())
        );
        assert_eq!(
            QueryPattern::parse("*and*").trie_path(),
            Some("and".to_string())
        );
    }

    #[test]
    fn malformed_patterns_rejected() {
        assert_eq!(QueryPattern::parse("*"), QueryPattern::Unsupported);
        assert_eq!(QueryPattern::parse("**"), QueryPattern::Unsupported);
        assert_eq!(QueryPattern::parse("a*b*c"), QueryPattern::Unsupported);
        assert_eq!(QueryPattern::parse("a**b"), QueryPattern::Unsupported);
        assert_eq!(QueryPattern::parse("*a*b*"), QueryPattern::Unsupported);
    }

    #[test]
    fn exact_and_unsupported_have_no_trie_path() {
        assert_eq!(QueryPattern::parse("cat").trie_path(), None);
        assert_eq!(QueryPattern::parse("*").trie_path(), None);
    }
}
