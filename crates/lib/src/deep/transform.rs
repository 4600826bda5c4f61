//! Recursive key and value transforms.
//!
//! Both transforms rebuild the tree with the same shape. Key transforms only
//! ever see mapping keys; value transforms only ever see scalar leaves.

use tracing::trace;

use crate::node::{Key, Mapping, Node, Scalar};

/// Returns a copy of `node` with every mapping key replaced by `f(key)`.
///
/// Keys are transformed at every depth, including mappings nested inside
/// sequences. Scalars are returned unchanged and never passed to `f`.
///
/// When `f` maps two keys of one mapping to the same new key, the pair
/// processed later wins; the key stays where it was first inserted.
///
/// ```
/// # use deepnest::{deep::deep_transform_keys, node::{Key, Mapping, Node}};
/// let node = Node::from(
///     Mapping::new()
///         .with(Key::symbol("str"), "String")
///         .with(Key::symbol("num"), 27),
/// );
///
/// let upper = deep_transform_keys(&node, |key| Key::text(key.to_string().to_uppercase()));
/// assert_eq!(upper, Node::from(Mapping::new().with("STR", "String").with("NUM", 27)));
/// ```
pub fn deep_transform_keys<F>(node: &Node, mut f: F) -> Node
where
    F: FnMut(&Key) -> Key,
{
    transform_keys(node, &mut f)
}

fn transform_keys<F>(node: &Node, f: &mut F) -> Node
where
    F: FnMut(&Key) -> Key,
{
    match node {
        Node::Mapping(map) => {
            let mut result = Mapping::with_capacity(map.len());
            for (key, value) in map.iter() {
                let new_key = f(key);
                let new_value = transform_keys(value, f);
                if result.insert(new_key, new_value).is_some() {
                    trace!(
                        original = %key,
                        "Transformed key collides with an earlier key; keeping the later value"
                    );
                }
            }
            Node::Mapping(result)
        }
        Node::Sequence(seq) => {
            Node::Sequence(seq.iter().map(|item| transform_keys(item, f)).collect())
        }
        Node::Scalar(_) => node.clone(),
    }
}

/// Returns a copy of `node` with every scalar leaf replaced by `f(leaf)`.
///
/// Mapping keys are kept as they are; containers keep their shape.
///
/// ```
/// # use deepnest::{deep::deep_transform_values, node::{Mapping, Node, Scalar}};
/// let node = Node::from(Mapping::new().with("a", 1).with("b", vec![Node::from(2)]));
///
/// let doubled = deep_transform_values(&node, |leaf| match leaf {
///     Scalar::Int(n) => Scalar::Int(n * 2),
///     other => other.clone(),
/// });
/// assert_eq!(
///     doubled,
///     Node::from(Mapping::new().with("a", 2).with("b", vec![Node::from(4)]))
/// );
/// ```
pub fn deep_transform_values<F>(node: &Node, mut f: F) -> Node
where
    F: FnMut(&Scalar) -> Scalar,
{
    transform_values(node, &mut f)
}

fn transform_values<F>(node: &Node, f: &mut F) -> Node
where
    F: FnMut(&Scalar) -> Scalar,
{
    match node {
        Node::Mapping(map) => {
            let mut result = Mapping::with_capacity(map.len());
            for (key, value) in map.iter() {
                result.push_unique(key.clone(), transform_values(value, f));
            }
            Node::Mapping(result)
        }
        Node::Sequence(seq) => {
            Node::Sequence(seq.iter().map(|item| transform_values(item, f)).collect())
        }
        Node::Scalar(scalar) => Node::Scalar(f(scalar)),
    }
}

/// Converts every mapping key to a text key, at every depth.
pub fn deep_stringify_keys(node: &Node) -> Node {
    deep_transform_keys(node, Key::to_text)
}

/// Converts every text key to a symbol key, at every depth.
///
/// Keys without a symbol form (integers, booleans, null) are left alone.
pub fn deep_symbolize_keys(node: &Node) -> Node {
    deep_transform_keys(node, Key::to_symbol)
}

/// Converts every scalar leaf to its text form, at every depth.
///
/// Null becomes the empty string.
pub fn deep_stringify_values(node: &Node) -> Node {
    deep_transform_values(node, Scalar::to_text)
}
