//! Command implementations

pub mod repl;

pub use repl::run_repl;
