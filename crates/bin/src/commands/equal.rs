//! Equal command - structural comparison of two documents.

use deepnest::DeepOps;

use crate::cli::EqualArgs;
use crate::output::{OutputFormat, read_document};

/// Run the equal command, returning whether the documents are equal
pub fn run(args: &EqualArgs, format: OutputFormat) -> Result<bool, Box<dyn std::error::Error>> {
    let left = read_document(&args.left)?;
    let right = read_document(&args.right)?;

    let equal = left.deep_equal(&right);

    match format {
        OutputFormat::Pretty => println!("{equal}"),
        OutputFormat::Json => {
            let value = serde_json::json!({ "equal": equal });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(equal)
}
