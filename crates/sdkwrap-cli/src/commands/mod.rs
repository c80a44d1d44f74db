//! Command implementations for the sdkwrap CLI.
//!
//! Each command loads its inputs, runs the operation, and prints the result
//! in the requested output format.

pub mod completions;
pub mod generate;
pub mod inspect;
