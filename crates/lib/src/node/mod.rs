//! The node data model.
//!
//! Every value the deep operations work on is a [`Node`]: a closed sum type
//! with exactly three variants.
//!
//! - [`Node::Mapping`] - ordered key/value pairs ([`Mapping`])
//! - [`Node::Sequence`] - ordered list of nodes ([`Sequence`])
//! - [`Node::Scalar`] - a leaf value ([`Scalar`])
//!
//! [`Node::classify`] reports the variant as a [`Kind`], which is what errors
//! and equality checks compare.
//!
//! # Usage
//!
//! ```
//! use deepnest::node::{Kind, Mapping, Node};
//!
//! let node = Node::from(
//!     Mapping::new()
//!         .with("name", "Alice")
//!         .with("tags", vec![Node::from("admin"), Node::from("ops")]),
//! );
//!
//! assert_eq!(node.classify(), Kind::Mapping);
//! assert_eq!(node.get("name"), Some(&Node::from("Alice")));
//! assert_eq!(node.to_string(), r#"{"name": "Alice", "tags": ["admin", "ops"]}"#);
//! ```

use std::fmt;

pub mod json;
pub mod key;
pub mod mapping;
pub mod scalar;

pub use key::Key;
pub use mapping::Mapping;
pub use scalar::Scalar;

/// An ordered list of nodes.
pub type Sequence = Vec<Node>;

/// The variant of a [`Node`], as reported by [`Node::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Mapping,
    Sequence,
    Scalar,
}

impl Kind {
    /// Returns the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Mapping => "mapping",
            Kind::Sequence => "sequence",
            Kind::Scalar => "scalar",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value in a nested mapping/sequence tree.
///
/// The derived `PartialEq` follows the same rules as
/// [`deep_equal`](crate::deep::deep_equal) except for NaN floats, which only
/// `deep_equal` treats as equal to themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Ordered key/value pairs
    Mapping(Mapping),
    /// Ordered list of nodes
    Sequence(Sequence),
    /// Leaf value
    Scalar(Scalar),
}

impl Node {
    /// The null scalar
    pub const NULL: Node = Node::Scalar(Scalar::Null);

    /// Creates an empty mapping node
    pub fn mapping() -> Self {
        Node::Mapping(Mapping::new())
    }

    /// Creates an empty sequence node
    pub fn sequence() -> Self {
        Node::Sequence(Vec::new())
    }

    /// Creates a symbol scalar node
    pub fn symbol(name: impl Into<String>) -> Self {
        Node::Scalar(Scalar::Symbol(name.into()))
    }

    /// Classifies the node as mapping, sequence or scalar
    pub fn classify(&self) -> Kind {
        match self {
            Node::Mapping(_) => Kind::Mapping,
            Node::Sequence(_) => Kind::Sequence,
            Node::Scalar(_) => Kind::Scalar,
        }
    }

    /// Returns the most specific type name: the scalar type for leaves,
    /// the kind for containers
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Scalar(scalar) => scalar.type_name(),
            other => other.classify().as_str(),
        }
    }

    /// Returns true if this is a mapping
    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }

    /// Returns true if this is a sequence
    pub fn is_sequence(&self) -> bool {
        matches!(self, Node::Sequence(_))
    }

    /// Returns true if this is a scalar
    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    /// Returns true if this is the null scalar
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Scalar(Scalar::Null))
    }

    /// Attempts to view as a mapping
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to view as a mutable mapping
    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Node::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to view as a sequence
    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Node::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// Attempts to view as a mutable sequence
    pub fn as_sequence_mut(&mut self) -> Option<&mut Sequence> {
        match self {
            Node::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// Attempts to view as a scalar
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        self.as_scalar()?.as_int()
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        self.as_scalar()?.as_text()
    }

    /// Looks up a key when this node is a mapping
    pub fn get(&self, key: impl Into<Key>) -> Option<&Node> {
        self.as_mapping()?.get(key)
    }

    /// Looks up an element when this node is a sequence
    pub fn index(&self, index: usize) -> Option<&Node> {
        self.as_sequence()?.get(index)
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::NULL
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Mapping(map) => write!(f, "{map}"),
            Node::Sequence(seq) => {
                write!(f, "[")?;
                for (i, item) in seq.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Node::Scalar(Scalar::Null) => write!(f, "null"),
            Node::Scalar(Scalar::Text(s)) => write!(f, "{s:?}"),
            Node::Scalar(Scalar::Symbol(s)) => write!(f, ":{s}"),
            Node::Scalar(scalar) => write!(f, "{scalar}"),
        }
    }
}

// Convenient From implementations for common types
impl From<Mapping> for Node {
    fn from(value: Mapping) -> Self {
        Node::Mapping(value)
    }
}

impl From<Sequence> for Node {
    fn from(value: Sequence) -> Self {
        Node::Sequence(value)
    }
}

impl From<Scalar> for Node {
    fn from(value: Scalar) -> Self {
        Node::Scalar(value)
    }
}

impl From<Key> for Node {
    fn from(value: Key) -> Self {
        Node::Scalar(value.into())
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Scalar(Scalar::Int(value))
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Scalar(Scalar::Int(value as i64))
    }
}

impl From<u32> for Node {
    fn from(value: u32) -> Self {
        Node::Scalar(Scalar::Int(value as i64))
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Scalar(Scalar::Float(value))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Scalar(Scalar::Text(value))
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Scalar(Scalar::Text(value.to_string()))
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Node::NULL, Into::into)
    }
}

impl<V: Into<Node>> FromIterator<V> for Node {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Node::Sequence(iter.into_iter().map(Into::into).collect())
    }
}

// PartialEq implementations for comparing Node with primitives
impl PartialEq<i64> for Node {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Node::Scalar(scalar) if scalar == other)
    }
}

impl PartialEq<&str> for Node {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Node::Scalar(scalar) if scalar == other)
    }
}

impl PartialEq<bool> for Node {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Node::Scalar(scalar) if scalar == other)
    }
}

impl serde::Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Node::Mapping(map) => map.serialize(serializer),
            Node::Sequence(seq) => seq.serialize(serializer),
            Node::Scalar(scalar) => scalar.serialize(serializer),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> serde::de::Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping, sequence or scalar value")
    }

    fn visit_unit<E>(self) -> Result<Node, E> {
        Ok(Node::NULL)
    }

    fn visit_none<E>(self) -> Result<Node, E> {
        Ok(Node::NULL)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Node, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde::Deserialize::deserialize(deserializer)
    }

    fn visit_bool<E>(self, value: bool) -> Result<Node, E> {
        Ok(Node::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Node, E> {
        Ok(Node::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Node, E> {
        // Integers beyond i64 keep their magnitude as floats
        Ok(match i64::try_from(value) {
            Ok(n) => Node::from(n),
            Err(_) => Node::from(value as f64),
        })
    }

    fn visit_f64<E>(self, value: f64) -> Result<Node, E> {
        Ok(Node::from(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Node, E> {
        Ok(Node::from(value))
    }

    fn visit_string<E>(self, value: String) -> Result<Node, E> {
        Ok(Node::from(value))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Node, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Node>()? {
            items.push(item);
        }
        Ok(Node::Sequence(items))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Node, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = Mapping::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, Node>()? {
            map.insert(key, value);
        }
        Ok(Node::Mapping(map))
    }
}
