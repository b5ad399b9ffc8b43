//! Permuterm Index
//!
//! A permuterm index over a word list: a 27-ary prefix trie (letters plus
//! an end-of-word marker) holding every cyclic rotation of `word + '$'`,
//! so exact lookups and single-wildcard queries (`ab*`, `*ab`, `a*b`,
//! `*ab*`) all reduce to trie prefix walks.
//!
//! # Quick Start
//!
//! ```rust
//! use permuterm_index::index::PermutermIndex;
//! use permuterm_index::query::{QueryOutcome, run_query};
//!
//! let index = PermutermIndex::from_words(["cat", "car", "dog"]);
//!
//! assert_eq!(run_query(&index, "cat"), QueryOutcome::ExactHit("cat"));
//! assert_eq!(run_query(&index, "*at"), QueryOutcome::Matches(vec!["cat"]));
//! ```

// Core domain types
pub mod core;

// Trie store, dictionary and index builder
pub mod index;

// Wildcard rewriting and query execution
pub mod query;

// Terminal output formatting
pub mod output;

// Command implementations
pub mod commands;

// Word-list file loading
pub mod wordlist;
