//! Structural deep copy.

use crate::node::{Mapping, Node};

/// Returns a deep copy of `node`.
///
/// Sequences and mappings are rebuilt element by element, preserving order;
/// mapping keys are reused as they are. The copy shares no mutable structure
/// with the original.
///
/// ```
/// # use deepnest::{deep::deep_dup, node::{Mapping, Node}};
/// let original = Node::from(Mapping::new().with("list", vec![Node::from("a")]));
/// let mut copy = deep_dup(&original);
///
/// if let Some(Node::Sequence(list)) = copy.as_mapping_mut().and_then(|m| m.get_mut("list")) {
///     list.push(Node::from("b"));
/// }
///
/// assert_eq!(original.get("list").and_then(|l| l.as_sequence()).map(Vec::len), Some(1));
/// assert_eq!(copy.get("list").and_then(|l| l.as_sequence()).map(Vec::len), Some(2));
/// ```
pub fn deep_dup(node: &Node) -> Node {
    match node {
        Node::Sequence(seq) => Node::Sequence(seq.iter().map(deep_dup).collect()),
        Node::Mapping(map) => Node::Mapping(dup_mapping(map)),
        // Scalars own their data, so a clone is an independent copy
        Node::Scalar(scalar) => Node::Scalar(scalar.clone()),
    }
}

fn dup_mapping(map: &Mapping) -> Mapping {
    let mut copy = Mapping::with_capacity(map.len());
    for (key, value) in map.iter() {
        copy.push_unique(key.clone(), deep_dup(value));
    }
    copy
}
