//! Wildcard query rewriting and execution

mod engine;
mod pattern;

pub use engine::{QueryOutcome, run_query};
pub use pattern::{QueryPattern, WILDCARD};
