//! Stringify-values command - converts every scalar to its string form.

use deepnest::DeepOps;

use crate::cli::InputArgs;
use crate::output::{OutputFormat, print_document, read_document};

/// Run the stringify-values command
pub fn run(args: &InputArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let document = read_document(&args.file)?;
    print_document(&document.deep_stringify_values(), format)
}
