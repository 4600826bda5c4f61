//! Subcommand implementations.

pub mod equal;
pub mod keys;
pub mod merge;
pub mod values;
