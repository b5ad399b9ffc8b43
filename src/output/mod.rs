//! Terminal output formatting
//!
//! The result-line formats are part of the program's compatibility
//! surface and must match byte for byte.

pub mod formatters;

pub use formatters::{
    QUERY_PROMPT, exact_hit_line, exact_miss_line, match_line, unsupported_line,
};
