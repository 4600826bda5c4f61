//! Keys command - rewrites every mapping key as a string in the chosen case.

use deepnest::{
    DeepOps,
    node::{Key, Node},
};

use crate::cli::{KeyCase, KeysArgs};
use crate::output::{OutputFormat, print_document, read_document};

/// Run the keys command
pub fn run(args: &KeysArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let document = read_document(&args.input.file)?;
    print_document(&rewrite_keys(&document, args.case), format)
}

/// Stringifies every key, at every depth, in the given case
pub fn rewrite_keys(node: &Node, case: KeyCase) -> Node {
    match case {
        KeyCase::Keep => node.deep_stringify_keys(),
        KeyCase::Upper => node.deep_transform_keys(|key| Key::text(key.to_string().to_uppercase())),
        KeyCase::Lower => node.deep_transform_keys(|key| Key::text(key.to_string().to_lowercase())),
    }
}
