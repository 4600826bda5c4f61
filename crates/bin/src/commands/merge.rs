//! Merge command - deep merges an overlay document into a base document.

use deepnest::{
    DeepOps,
    node::{Key, Node, Scalar},
};

use crate::cli::{ConflictStrategy, MergeArgs};
use crate::output::{OutputFormat, print_document, read_document};

/// Run the merge command
pub fn run(args: &MergeArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let base = read_document(&args.base)?;
    let overlay = read_document(&args.overlay)?;

    let merged = merge(&base, &overlay, args.conflict)?;
    tracing::debug!(keys = merged.as_mapping().map_or(0, |m| m.len()), "Merged documents");

    print_document(&merged, format)
}

/// Merges two documents with the selected conflict strategy
pub fn merge(base: &Node, overlay: &Node, strategy: ConflictStrategy) -> deepnest::Result<Node> {
    let merged = match strategy {
        ConflictStrategy::Overlay => base.deep_merge(overlay)?,
        ConflictStrategy::Base => base.deep_merge_with(overlay, |_, old, _| old.clone())?,
        ConflictStrategy::Collect => base.deep_merge_with(overlay, |_, old, new| {
            Node::Sequence(vec![old.clone(), new.clone()])
        })?,
        ConflictStrategy::Sum => base.deep_merge_with(overlay, sum)?,
    };
    Ok(Node::Mapping(merged))
}

fn sum(_key: &Key, base: &Node, overlay: &Node) -> Node {
    let (Node::Scalar(old), Node::Scalar(new)) = (base, overlay) else {
        return overlay.clone();
    };
    match (old, new) {
        (Scalar::Int(a), Scalar::Int(b)) => match a.checked_add(*b) {
            Some(total) => Node::from(total),
            None => overlay.clone(),
        },
        (Scalar::Float(a), Scalar::Float(b)) => Node::from(a + b),
        (Scalar::Text(a), Scalar::Text(b)) => Node::from(format!("{a}{b}")),
        _ => overlay.clone(),
    }
}
