//! Pure line formatters for query results
//!
//! Kept as plain string builders so the REPL can write them anywhere and
//! the byte-exact formats stay testable in isolation.

/// Prompt printed before every query read.
pub const QUERY_PROMPT: &str = "\nQuery: ";

/// One enumeration line of a wildcard result set, 1-based rank.
#[must_use]
pub fn match_line(rank: usize, word: &str) -> String {
    format!("[{rank}] {word}\n")
}

/// Exact-search hit; `word` is the stored dictionary word.
#[must_use]
pub fn exact_hit_line(word: &str) -> String {
    format!("[{word}] found!\n")
}

/// Exact-search miss; `token` is the query as typed.
#[must_use]
pub fn exact_miss_line(token: &str) -> String {
    format!("[{token}] not found!\n")
}

/// Rejection line for wildcard forms outside the supported cases.
#[must_use]
pub fn unsupported_line(token: &str) -> String {
    format!("[{token}] unsupported pattern!\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_line_format() {
        assert_eq!(match_line(1, "car"), "[1] car\n");
        assert_eq!(match_line(12, "cat"), "[12] cat\n");
    }

    #[test]
    fn exact_lines_format() {
        assert_eq!(exact_hit_line("cat"), "[cat] found!\n");
        assert_eq!(exact_miss_line("bird"), "[bird] not found!\n");
        assert_eq!(unsupported_line("*"), "[*] unsupported pattern!\n");
    }
}
