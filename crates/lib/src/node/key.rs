//! Mapping keys.
//!
//! Keys are the hashable subset of scalars. Text and symbol keys are kept
//! distinct so that stringify/symbolize conversions are observable.

use std::fmt;

/// A key inside a [`Mapping`](super::Mapping).
///
/// Two keys are equal only when they have the same variant and the same value,
/// so `Key::Text("a")` and `Key::Symbol("a")` name different entries.
///
/// ```
/// # use deepnest::node::Key;
/// assert_ne!(Key::text("id"), Key::symbol("id"));
/// assert_eq!(Key::symbol("id").to_string(), "id");
/// assert_eq!(Key::Int(7).to_string(), "7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Null key
    Null,
    /// Boolean key
    Bool(bool),
    /// Integer key
    Int(i64),
    /// String key
    Text(String),
    /// Interned-name key
    Symbol(String),
}

impl Key {
    /// Creates a text key
    pub fn text(value: impl Into<String>) -> Self {
        Key::Text(value.into())
    }

    /// Creates a symbol key
    pub fn symbol(value: impl Into<String>) -> Self {
        Key::Symbol(value.into())
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Key::Null => "null",
            Key::Bool(_) => "bool",
            Key::Int(_) => "int",
            Key::Text(_) => "text",
            Key::Symbol(_) => "symbol",
        }
    }

    /// Returns the string content of a text or symbol key
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Text(s) | Key::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true for symbol keys
    pub fn is_symbol(&self) -> bool {
        matches!(self, Key::Symbol(_))
    }

    /// Converts the key to its text form.
    ///
    /// Every key has one: its display form.
    pub fn to_text(&self) -> Key {
        match self {
            Key::Text(_) => self.clone(),
            other => Key::Text(other.to_string()),
        }
    }

    /// Converts the key to a symbol where a symbol form exists.
    ///
    /// Only text and symbol keys have one; other keys are returned unchanged.
    pub fn to_symbol(&self) -> Key {
        match self {
            Key::Text(s) => Key::Symbol(s.clone()),
            other => other.clone(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Matches the empty string form of nil
            Key::Null => Ok(()),
            Key::Bool(b) => write!(f, "{b}"),
            Key::Int(n) => write!(f, "{n}"),
            Key::Text(s) | Key::Symbol(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Text(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Text(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::Text(value.clone())
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Key::Bool(value)
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        match self {
            Key::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl serde::Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Key::Text(s) | Key::Symbol(s) => serializer.serialize_str(s),
            other => serializer.collect_str(other),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Key::Text)
    }
}
