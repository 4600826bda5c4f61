//! Conversions between [`Node`] and `serde_json::Value`.
//!
//! JSON is the usual source of node trees. Converting back is fallible since
//! JSON has no representation for non-finite floats.

use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use super::{Key, Mapping, Node, Scalar};
use crate::{Result, deep::DeepError};

impl From<JsonValue> for Node {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Node::NULL,
            JsonValue::Bool(b) => Node::from(b),
            JsonValue::Number(n) => Node::Scalar(number_to_scalar(&n)),
            JsonValue::String(s) => Node::from(s),
            JsonValue::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            JsonValue::Object(object) => Node::Mapping(
                object
                    .into_iter()
                    .map(|(key, value)| (Key::Text(key), Node::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&JsonValue> for Node {
    fn from(value: &JsonValue) -> Self {
        Node::from(value.clone())
    }
}

fn number_to_scalar(number: &Number) -> Scalar {
    if let Some(n) = number.as_i64() {
        Scalar::Int(n)
    } else {
        // u64 beyond i64 and every non-integer land here
        Scalar::Float(number.as_f64().unwrap_or(f64::NAN))
    }
}

impl TryFrom<&Scalar> for JsonValue {
    type Error = DeepError;

    fn try_from(scalar: &Scalar) -> std::result::Result<Self, Self::Error> {
        Ok(match scalar {
            Scalar::Null => JsonValue::Null,
            Scalar::Bool(b) => JsonValue::Bool(*b),
            Scalar::Int(n) => JsonValue::Number((*n).into()),
            Scalar::Float(n) => {
                JsonValue::Number(Number::from_f64(*n).ok_or(DeepError::NonFiniteFloat { value: *n })?)
            }
            Scalar::Text(s) | Scalar::Symbol(s) => JsonValue::String(s.clone()),
        })
    }
}

impl TryFrom<&Mapping> for JsonValue {
    type Error = DeepError;

    fn try_from(map: &Mapping) -> std::result::Result<Self, Self::Error> {
        let entries = map.rendered_entries();
        let mut object = JsonMap::with_capacity(entries.len());
        for (name, value) in entries {
            object.insert(name, JsonValue::try_from(value)?);
        }
        Ok(JsonValue::Object(object))
    }
}

impl TryFrom<&Node> for JsonValue {
    type Error = DeepError;

    /// Converts a node tree to JSON.
    ///
    /// Keys are rendered as by [`Mapping::rendered_entries`], so distinct keys
    /// such as `Int(1)` and `Text("1")` collapse into one JSON member (the
    /// later one wins).
    fn try_from(node: &Node) -> std::result::Result<Self, Self::Error> {
        match node {
            Node::Mapping(map) => JsonValue::try_from(map),
            Node::Sequence(seq) => seq
                .iter()
                .map(JsonValue::try_from)
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(JsonValue::Array),
            Node::Scalar(scalar) => JsonValue::try_from(scalar),
        }
    }
}

impl TryFrom<Node> for JsonValue {
    type Error = DeepError;

    fn try_from(node: Node) -> std::result::Result<Self, Self::Error> {
        JsonValue::try_from(&node)
    }
}

impl Node {
    /// Parses a JSON document into a node tree.
    ///
    /// ```
    /// # use deepnest::node::Node;
    /// let node = Node::from_json_str(r#"{"a": [1, 2.5, null]}"#)?;
    /// assert_eq!(node.get("a").and_then(|a| a.index(0)), Some(&Node::from(1)));
    /// # Ok::<(), deepnest::Error>(())
    /// ```
    pub fn from_json_str(input: &str) -> Result<Node> {
        Ok(serde_json::from_str(input)?)
    }

    /// Converts to a `serde_json::Value`
    pub fn to_json(&self) -> Result<JsonValue> {
        Ok(JsonValue::try_from(self)?)
    }

    /// Renders compact JSON, keeping mapping order
    pub fn to_json_string(&self) -> Result<String> {
        ensure_finite(self)?;
        Ok(serde_json::to_string(self)?)
    }

    /// Renders indented JSON, keeping mapping order
    pub fn to_json_string_pretty(&self) -> Result<String> {
        ensure_finite(self)?;
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// serde_json writes non-finite floats as null, so reject them up front
fn ensure_finite(node: &Node) -> std::result::Result<(), DeepError> {
    match node {
        Node::Mapping(map) => map.values().try_for_each(ensure_finite),
        Node::Sequence(seq) => seq.iter().try_for_each(ensure_finite),
        Node::Scalar(Scalar::Float(value)) if !value.is_finite() => {
            Err(DeepError::NonFiniteFloat { value: *value })
        }
        Node::Scalar(_) => Ok(()),
    }
}
