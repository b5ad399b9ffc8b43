//! Core domain types for the permuterm index
//!
//! This module contains the fundamental domain pieces with zero external
//! dependencies: the 27-symbol trie alphabet and permuterm generation.
//! Everything here is pure and has clear mathematical properties.

mod permuterm;
mod symbol;

pub use permuterm::make_permuterms;
pub use symbol::{ALPHABET_SIZE, END_MARKER, symbol_slot};

pub(crate) use symbol::{END_SLOT, path_slots};
