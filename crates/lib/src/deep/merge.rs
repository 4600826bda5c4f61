//! Recursive right-biased merge.
//!
//! Merging walks the overlay's keys in order. Keys only in the base keep their
//! value and position, keys only in the overlay are appended, and keys in both
//! are resolved:
//!
//! - both values are mappings: merged recursively
//! - otherwise: the conflict function decides, defaulting to the overlay value
//!
//! Sequences are never merged element-wise. A list in the overlay replaces the
//! list in the base (or goes through the conflict function) as a whole.

use tracing::{debug, trace};

use super::DeepError;
use crate::{
    Result,
    node::{Key, Mapping, Node},
};

/// Merges `overlay` into `base`, with overlay values winning conflicts.
///
/// Both arguments must be mappings; anything else is rejected with
/// [`DeepError::InvalidArgument`].
///
/// # Examples
///
/// ```
/// # use deepnest::{deep::deep_merge, node::{Mapping, Node}};
/// let base = Node::from(Mapping::new().with("a", 100).with("b", 200));
/// let overlay = Node::from(Mapping::new().with("b", 300).with("c", 400));
///
/// let merged = deep_merge(&base, &overlay)?;
/// assert_eq!(merged, Mapping::new().with("a", 100).with("b", 300).with("c", 400));
///
/// let err = deep_merge(&Node::from(vec![Node::from(1)]), &overlay).unwrap_err();
/// assert!(err.is_invalid_argument());
/// # Ok::<(), deepnest::Error>(())
/// ```
pub fn deep_merge(base: &Node, overlay: &Node) -> Result<Mapping> {
    let (base, overlay) = require_mappings(base, overlay)?;
    Ok(base.deep_merged(overlay))
}

/// Merges `overlay` into `base`, resolving conflicts with `conflict`.
///
/// `conflict` receives the key, the base value and the overlay value whenever
/// a key is present on both sides and the two values are not both mappings.
/// It is passed down into nested merges.
///
/// ```
/// # use deepnest::{deep::deep_merge_with, node::{Mapping, Node}};
/// let base = Node::from(Mapping::new().with("hits", 2).with("name", "a"));
/// let overlay = Node::from(Mapping::new().with("hits", 3).with("name", "b"));
///
/// let merged = deep_merge_with(&base, &overlay, |_key, old, new| {
///     match (old.as_int(), new.as_int()) {
///         (Some(a), Some(b)) => Node::from(a + b),
///         _ => old.clone(),
///     }
/// })?;
/// assert_eq!(merged.get("hits"), Some(&Node::from(5)));
/// assert_eq!(merged.get("name"), Some(&Node::from("a")));
/// # Ok::<(), deepnest::Error>(())
/// ```
pub fn deep_merge_with<F>(base: &Node, overlay: &Node, conflict: F) -> Result<Mapping>
where
    F: FnMut(&Key, &Node, &Node) -> Node,
{
    let (base, overlay) = require_mappings(base, overlay)?;
    Ok(base.deep_merged_with(overlay, conflict))
}

fn require_mappings<'a>(
    base: &'a Node,
    overlay: &'a Node,
) -> Result<(&'a Mapping, &'a Mapping)> {
    match (base, overlay) {
        (Node::Mapping(base), Node::Mapping(overlay)) => Ok((base, overlay)),
        _ => {
            debug!(
                base = %base.classify(),
                overlay = %overlay.classify(),
                "Rejecting deep_merge of non-mapping arguments"
            );
            Err(DeepError::merge_requires_mappings(base.classify(), overlay.classify()).into())
        }
    }
}

fn overlay_wins(_key: &Key, _base: &Node, overlay: &Node) -> Node {
    overlay.clone()
}

fn merge_mappings<F>(base: &Mapping, overlay: &Mapping, conflict: &mut F) -> Mapping
where
    F: FnMut(&Key, &Node, &Node) -> Node,
{
    let mut merged = base.clone();
    for (key, incoming) in overlay.iter() {
        let Some(current) = merged.get_key_mut(key) else {
            merged.push_unique(key.clone(), incoming.clone());
            continue;
        };

        let resolved = match (&*current, incoming) {
            (Node::Mapping(ours), Node::Mapping(theirs)) => {
                Node::Mapping(merge_mappings(ours, theirs, conflict))
            }
            (ours, theirs) => {
                trace!(
                    %key,
                    base = ours.type_name(),
                    overlay = theirs.type_name(),
                    "Resolving merge conflict"
                );
                conflict(key, ours, theirs)
            }
        };
        *current = resolved;
    }
    merged
}

impl Mapping {
    /// Merges `overlay` into this mapping, with overlay values winning conflicts.
    ///
    /// The infallible form of [`deep_merge`] for callers that already hold two
    /// mappings. Neither input is modified.
    pub fn deep_merged(&self, overlay: &Mapping) -> Mapping {
        merge_mappings(self, overlay, &mut overlay_wins)
    }

    /// Merges `overlay` into this mapping, resolving conflicts with `conflict`.
    pub fn deep_merged_with<F>(&self, overlay: &Mapping, mut conflict: F) -> Mapping
    where
        F: FnMut(&Key, &Node, &Node) -> Node,
    {
        merge_mappings(self, overlay, &mut conflict)
    }
}
