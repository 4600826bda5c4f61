//! Leaf values of a node tree.

use std::fmt;

use super::Key;

/// A non-container leaf value.
///
/// Equality between scalars is type-strict: an integer never equals a float
/// holding the same number, and text never equals a symbol with the same name.
///
/// ```
/// # use deepnest::node::Scalar;
/// assert!(Scalar::Int(1).strict_eq(&Scalar::Int(1)));
/// assert!(!Scalar::Int(1).strict_eq(&Scalar::Float(1.0)));
/// assert!(!Scalar::Int(1).strict_eq(&Scalar::from("1")));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Null/empty value
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit float
    Float(f64),
    /// UTF-8 string
    Text(String),
    /// Interned name; serializes as a plain string
    #[serde(skip_deserializing)]
    Symbol(String),
}

impl Scalar {
    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::Text(_) => "text",
            Scalar::Symbol(_) => "symbol",
        }
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Scalar::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a symbol name
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Scalar::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Same concrete type and same value.
    ///
    /// NaN compares equal to NaN here so that every scalar is equal to itself.
    pub fn strict_eq(&self, other: &Scalar) -> bool {
        match (self, other) {
            (Scalar::Null, Scalar::Null) => true,
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::Float(a), Scalar::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Scalar::Text(a), Scalar::Text(b)) => a == b,
            (Scalar::Symbol(a), Scalar::Symbol(b)) => a == b,
            _ => false,
        }
    }

    /// Converts the scalar to a mapping key, if it has a key form.
    ///
    /// Floats are not valid keys.
    pub fn to_key(&self) -> Option<Key> {
        match self {
            Scalar::Null => Some(Key::Null),
            Scalar::Bool(b) => Some(Key::Bool(*b)),
            Scalar::Int(n) => Some(Key::Int(*n)),
            Scalar::Float(_) => None,
            Scalar::Text(s) => Some(Key::Text(s.clone())),
            Scalar::Symbol(s) => Some(Key::Symbol(s.clone())),
        }
    }

    /// Display form as a text scalar
    pub fn to_text(&self) -> Scalar {
        match self {
            Scalar::Text(_) => self.clone(),
            other => Scalar::Text(other.to_string()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Float(n) => write!(f, "{n:?}"),
            Scalar::Text(s) | Scalar::Symbol(s) => write!(f, "{s}"),
        }
    }
}

impl From<Key> for Scalar {
    fn from(key: Key) -> Self {
        match key {
            Key::Null => Scalar::Null,
            Key::Bool(b) => Scalar::Bool(b),
            Key::Int(n) => Scalar::Int(n),
            Key::Text(s) => Scalar::Text(s),
            Key::Symbol(s) => Scalar::Symbol(s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl PartialEq<i64> for Scalar {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Scalar::Int(n) if n == other)
    }
}

impl PartialEq<&str> for Scalar {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Scalar::Text(s) if s == other)
    }
}

impl PartialEq<bool> for Scalar {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Scalar::Bool(b) if b == other)
    }
}
