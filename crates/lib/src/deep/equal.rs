//! Recursive structural equality.

use crate::node::{Mapping, Node};

/// Returns true if `a` and `b` have the same structure and the same values.
///
/// - Sequences compare element by element, in order.
/// - Mappings compare as sets of pairs; key order is ignored.
/// - Scalars must have the same concrete type and value, so `1` and `1.0`
///   differ, as do `1` and `"1"`.
/// - Nodes of different kinds are never equal.
///
/// Traversal stops at the first mismatch.
///
/// ```
/// # use deepnest::{deep::deep_equal, node::{Mapping, Node}};
/// let left = Node::from(Mapping::new().with("a", 1).with("b", 2));
/// let right = Node::from(Mapping::new().with("b", 2).with("a", 1));
/// assert!(deep_equal(&left, &right));
///
/// assert!(!deep_equal(&Node::from(1), &Node::from(1.0)));
/// ```
pub fn deep_equal(a: &Node, b: &Node) -> bool {
    if a.classify() != b.classify() {
        return false;
    }

    match (a, b) {
        (Node::Sequence(left), Node::Sequence(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right.iter())
                    .all(|(l, r)| deep_equal(l, r))
        }
        (Node::Mapping(left), Node::Mapping(right)) => mappings_equal(left, right),
        (Node::Scalar(left), Node::Scalar(right)) => left.strict_eq(right),
        _ => false,
    }
}

fn mappings_equal(left: &Mapping, right: &Mapping) -> bool {
    // Keys are unique on both sides, so equal sizes plus every left key
    // found on the right means the key sets match
    left.len() == right.len()
        && left.iter().all(|(key, value)| {
            right
                .get_key(key)
                .is_some_and(|other| deep_equal(value, other))
        })
}
