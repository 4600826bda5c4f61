//! Recursive structural operations over node trees.
//!
//! Every operation follows the same traversal: classify the node as mapping,
//! sequence or scalar, recurse into children, and reassemble. They differ only
//! in how the result is put back together.
//!
//! # Operations
//!
//! - [`deep_dup`] - structural deep copy
//! - [`deep_merge`] / [`deep_merge_with`] - recursive right-biased merge of two mappings
//! - [`deep_equal`] - type-strict structural equality
//! - [`deep_transform_keys`] - rewrite mapping keys at every depth
//! - [`deep_transform_values`] - rewrite scalar leaves at every depth
//! - [`deep_stringify_keys`], [`deep_symbolize_keys`], [`deep_stringify_values`] -
//!   canonical coercions built on the transforms
//!
//! The same operations are available as methods through [`DeepOps`].
//!
//! All operations borrow their inputs and return new trees; nothing is
//! modified in place. Only merging can fail, and only when one of its
//! top-level arguments is not a mapping.

pub mod dup;
pub mod equal;
pub mod errors;
pub mod merge;
pub mod traits;
pub mod transform;

pub use dup::deep_dup;
pub use equal::deep_equal;
pub use errors::DeepError;
pub use merge::{deep_merge, deep_merge_with};
pub use traits::DeepOps;
pub use transform::{
    deep_stringify_keys, deep_stringify_values, deep_symbolize_keys, deep_transform_keys,
    deep_transform_values,
};
