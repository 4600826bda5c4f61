//! Method-call access to the deep operations.
//!
//! [`DeepOps`] is implemented for the node types and for the native Rust types
//! that map onto them, so any of them can be the receiver of a deep operation.
//! Every method forwards to the free function of the same name with the
//! receiver as its first argument.

use std::borrow::Cow;

use super::{
    deep_dup, deep_equal, deep_merge, deep_merge_with, deep_stringify_keys,
    deep_stringify_values, deep_symbolize_keys, deep_transform_keys, deep_transform_values,
};
use crate::{
    Result,
    node::{Key, Mapping, Node, Scalar},
};

/// Deep operations as methods.
///
/// Implementors only provide [`as_node`](DeepOps::as_node); every operation
/// is a provided method.
///
/// # Examples
///
/// ```
/// use deepnest::{DeepOps, node::{Key, Mapping, Node}};
///
/// let config = Mapping::new().with("port", 80).with("tls", Mapping::new().with("on", false));
/// let local = Mapping::new().with("tls", Mapping::new().with("on", true));
///
/// let merged = config.deep_merge(&local)?;
/// assert_eq!(merged.get("port"), Some(&Node::from(80)));
/// assert!(merged.deep_equal(&Mapping::new().with("tls", Mapping::new().with("on", true)).with("port", 80)));
///
/// // Scalars carry the methods too, but only mappings can be merged
/// assert!(42i64.deep_merge(&local).is_err());
/// assert!(42i64.deep_equal(&Node::from(42)));
/// # Ok::<(), deepnest::Error>(())
/// ```
pub trait DeepOps {
    /// Views the receiver as a node, borrowing where possible
    fn as_node(&self) -> Cow<'_, Node>;

    /// See [`deep_dup`]
    fn deep_dup(&self) -> Node {
        deep_dup(&self.as_node())
    }

    /// See [`deep_merge`]
    fn deep_merge<O>(&self, overlay: &O) -> Result<Mapping>
    where
        O: DeepOps + ?Sized,
    {
        deep_merge(&self.as_node(), &overlay.as_node())
    }

    /// See [`deep_merge_with`]
    fn deep_merge_with<O, F>(&self, overlay: &O, conflict: F) -> Result<Mapping>
    where
        O: DeepOps + ?Sized,
        F: FnMut(&Key, &Node, &Node) -> Node,
    {
        deep_merge_with(&self.as_node(), &overlay.as_node(), conflict)
    }

    /// See [`deep_equal`]
    fn deep_equal<O>(&self, other: &O) -> bool
    where
        O: DeepOps + ?Sized,
    {
        deep_equal(&self.as_node(), &other.as_node())
    }

    /// See [`deep_transform_keys`]
    fn deep_transform_keys<F>(&self, f: F) -> Node
    where
        F: FnMut(&Key) -> Key,
    {
        deep_transform_keys(&self.as_node(), f)
    }

    /// See [`deep_transform_values`]
    fn deep_transform_values<F>(&self, f: F) -> Node
    where
        F: FnMut(&Scalar) -> Scalar,
    {
        deep_transform_values(&self.as_node(), f)
    }

    /// See [`deep_stringify_keys`]
    fn deep_stringify_keys(&self) -> Node {
        deep_stringify_keys(&self.as_node())
    }

    /// See [`deep_symbolize_keys`]
    fn deep_symbolize_keys(&self) -> Node {
        deep_symbolize_keys(&self.as_node())
    }

    /// See [`deep_stringify_values`]
    fn deep_stringify_values(&self) -> Node {
        deep_stringify_values(&self.as_node())
    }
}

impl DeepOps for Node {
    fn as_node(&self) -> Cow<'_, Node> {
        Cow::Borrowed(self)
    }
}

impl DeepOps for Mapping {
    fn as_node(&self) -> Cow<'_, Node> {
        Cow::Owned(Node::Mapping(self.clone()))
    }

    // Skip the round trip through Node when both sides are already mappings
    fn deep_merge<O>(&self, overlay: &O) -> Result<Mapping>
    where
        O: DeepOps + ?Sized,
    {
        match &*overlay.as_node() {
            Node::Mapping(overlay) => Ok(self.deep_merged(overlay)),
            other => deep_merge(&self.as_node(), other),
        }
    }
}

impl DeepOps for Vec<Node> {
    fn as_node(&self) -> Cow<'_, Node> {
        Cow::Owned(Node::Sequence(self.clone()))
    }
}

impl DeepOps for Scalar {
    fn as_node(&self) -> Cow<'_, Node> {
        Cow::Owned(Node::Scalar(self.clone()))
    }
}

impl DeepOps for str {
    fn as_node(&self) -> Cow<'_, Node> {
        Cow::Owned(Node::from(self))
    }
}

impl DeepOps for String {
    fn as_node(&self) -> Cow<'_, Node> {
        Cow::Owned(Node::from(self.as_str()))
    }
}

/// Macro to implement DeepOps for copyable scalars that widen into a Node
macro_rules! impl_deep_ops_scalar {
    ($type:ty => $widen:expr) => {
        impl DeepOps for $type {
            fn as_node(&self) -> Cow<'_, Node> {
                Cow::Owned(Node::from($widen(*self)))
            }
        }
    };
}

impl_deep_ops_scalar!(i64 => i64::from);
impl_deep_ops_scalar!(i32 => i64::from);
impl_deep_ops_scalar!(u32 => i64::from);
impl_deep_ops_scalar!(f64 => f64::from);
impl_deep_ops_scalar!(f32 => f64::from);
impl_deep_ops_scalar!(bool => bool::from);

impl DeepOps for serde_json::Value {
    fn as_node(&self) -> Cow<'_, Node> {
        Cow::Owned(Node::from(self))
    }
}
