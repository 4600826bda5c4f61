//!
//! deepnest: recursive structural operations over nested mapping/sequence data.
//!
//! The library works on the kind of trees produced by parsing JSON-like
//! configuration or API payloads.
//!
//! ## Core Concepts
//!
//! * **Nodes (`node::Node`)**: A closed sum type of `Mapping`, `Sequence` and `Scalar`. Every operation classifies its input with `Node::classify` and recurses into the containers.
//! * **Mappings (`node::Mapping`)**: Insertion-ordered key/value pairs with unique `node::Key`s. Equality ignores key order.
//! * **Deep operations (`deep`)**: `deep_dup`, `deep_merge`, `deep_equal`, `deep_transform_keys` and `deep_transform_values`, plus the `deep_stringify_keys`, `deep_symbolize_keys` and `deep_stringify_values` coercions built on the transforms.
//! * **Extension methods (`DeepOps`)**: The same operations as methods on nodes and on native Rust values (`str`/`String`, the integer and float primitives, `bool`, `Vec<Node>`, `serde_json::Value`).
//!
//! ## Example
//!
//! ```
//! use deepnest::{DeepOps, node::{Mapping, Node}};
//!
//! let defaults = Node::from_json_str(r#"{"server": {"port": 80, "hosts": ["a"]}, "debug": false}"#)?;
//! let local = Node::from_json_str(r#"{"server": {"hosts": ["b", "c"]}, "debug": true}"#)?;
//!
//! let merged = defaults.deep_merge(&local)?;
//! let expected = Node::from_json_str(r#"{"debug": true, "server": {"hosts": ["b", "c"], "port": 80}}"#)?;
//! assert!(merged.deep_equal(&expected));
//! # Ok::<(), deepnest::Error>(())
//! ```

pub mod deep;
pub mod node;

pub use deep::{
    DeepError, DeepOps, deep_dup, deep_equal, deep_merge, deep_merge_with, deep_stringify_keys,
    deep_stringify_values, deep_symbolize_keys, deep_transform_keys, deep_transform_values,
};
pub use node::{Key, Kind, Mapping, Node, Scalar, Sequence};

/// Result type used throughout the deepnest library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the deepnest library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from the deep operations
    #[error(transparent)]
    Deep(deep::DeepError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Deep(_) => "deep",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error is an argument validation failure.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::Deep(deep_err) => deep_err.is_invalid_argument(),
            _ => false,
        }
    }

    /// Check if this error is related to converting or parsing data.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            Error::Serialize(_) => true,
            Error::Deep(deep_err) => deep_err.is_conversion_error(),
        }
    }
}
