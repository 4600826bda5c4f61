//! CLI argument definitions for the deepnest binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// How `merge` resolves keys present on both sides with non-mapping values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConflictStrategy {
    /// The overlay value replaces the base value (default)
    Overlay,
    /// The base value is kept
    Base,
    /// Both values are kept as a two-element list `[base, overlay]`
    Collect,
    /// Numbers of the same type are added and strings concatenated; anything else takes the overlay value
    Sum,
}

/// Key case applied by the `keys` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KeyCase {
    Upper,
    Lower,
    /// Stringify keys without changing their case
    Keep,
}

/// Structural operations on nested JSON documents
#[derive(Parser, Debug)]
#[command(name = "deepnest")]
#[command(about = "deepnest: deep merge, compare and transform nested JSON documents")]
#[command(version)]
pub struct Cli {
    /// Output format for documents
    #[arg(short, long, global = true, default_value = "pretty", env = "DEEPNEST_FORMAT")]
    pub format: OutputFormat,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deep merge OVERLAY into BASE
    Merge(MergeArgs),
    /// Compare two documents structurally; exits with status 1 when they differ and 2 on errors
    Equal(EqualArgs),
    /// Rewrite every mapping key, at every depth, as a string
    Keys(KeysArgs),
    /// Convert every scalar value, at every depth, to a string
    StringifyValues(InputArgs),
}

/// Arguments for the merge command
#[derive(clap::Args, Debug)]
pub struct MergeArgs {
    /// Base document (`-` for stdin)
    pub base: PathBuf,

    /// Overlay document whose values win conflicts (`-` for stdin)
    pub overlay: PathBuf,

    /// Conflict resolution strategy
    #[arg(short, long, default_value = "overlay", env = "DEEPNEST_CONFLICT")]
    pub conflict: ConflictStrategy,
}

/// Arguments for the equal command
#[derive(clap::Args, Debug)]
pub struct EqualArgs {
    /// Left document (`-` for stdin)
    pub left: PathBuf,

    /// Right document (`-` for stdin)
    pub right: PathBuf,
}

/// Arguments for the keys command
#[derive(clap::Args, Debug)]
pub struct KeysArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Case applied to every key
    #[arg(long, default_value = "keep")]
    pub case: KeyCase,
}

/// A single input document
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input document (`-` for stdin)
    pub file: PathBuf,
}
