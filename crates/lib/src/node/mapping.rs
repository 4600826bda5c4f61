//! Ordered mappings.
//!
//! A [`Mapping`] keeps its pairs in insertion order. Lookups are linear in the
//! width of the mapping, which suits the configuration-sized payloads the deep
//! operations are meant for.

use std::{collections::HashMap, fmt};

use super::{Key, Node};

/// An ordered collection of unique keys to nodes.
///
/// Inserting an existing key replaces its value in place, keeping the position
/// of the first insertion. Equality ignores key order.
///
/// # Examples
///
/// ```
/// # use deepnest::node::{Key, Mapping, Node};
/// let mut map = Mapping::new();
/// map.insert("name", "Alice");
/// map.insert("age", 30);
/// map.insert("name", "Bob");
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.keys().next(), Some(&Key::text("name")));
/// assert_eq!(map.get("name"), Some(&Node::from("Bob")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    entries: Vec<(Key, Node)>,
}

impl Mapping {
    /// Creates a new empty mapping
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty mapping with room for `capacity` pairs
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of pairs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the mapping has no pairs
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &Key) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Returns true if the mapping contains the given key
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.position(&key.into()).is_some()
    }

    /// Gets a value by key
    pub fn get(&self, key: impl Into<Key>) -> Option<&Node> {
        self.get_key(&key.into())
    }

    /// Gets a value by borrowed key
    pub fn get_key(&self, key: &Key) -> Option<&Node> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    /// Gets a mutable reference to a value by key
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Node> {
        self.get_key_mut(&key.into())
    }

    /// Gets a mutable reference to a value by borrowed key
    pub fn get_key_mut(&mut self, key: &Key) -> Option<&mut Node> {
        let index = self.position(key)?;
        Some(&mut self.entries[index].1)
    }

    /// Sets a value, returning the previous value if the key was present.
    ///
    /// An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Node>) -> Option<Node> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Appends a pair whose key is known not to be present yet.
    ///
    /// Used when rebuilding a mapping from one that already has unique keys.
    pub(crate) fn push_unique(&mut self, key: Key, value: Node) {
        debug_assert!(self.position(&key).is_none(), "duplicate key {key}");
        self.entries.push((key, value));
    }

    /// Removes a key, returning its value. Later pairs shift down.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Node> {
        let index = self.position(&key.into())?;
        Some(self.entries.remove(index).1)
    }

    /// Returns an iterator over all pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Node)> {
        self.entries.iter().map(split_entry)
    }

    /// Returns a mutable iterator over all pairs in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Key, &mut Node)> {
        self.entries.iter_mut().map(|(k, v)| (&*k, v))
    }

    /// Returns an iterator over all keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over all values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Node> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Returns the pairs as they appear in serialized output.
    ///
    /// Keys are rendered in display form. Distinct keys that render the same,
    /// such as `Int(1)` and `Text("1")`, collapse into one entry: the later
    /// value wins and the entry stays at the first key's position.
    pub fn rendered_entries(&self) -> Vec<(String, &Node)> {
        let mut rendered: Vec<(String, &Node)> = Vec::with_capacity(self.len());
        let mut seen: HashMap<String, usize> = HashMap::with_capacity(self.len());
        for (key, value) in self.iter() {
            let name = key.to_string();
            match seen.get(&name) {
                Some(&index) => rendered[index].1 = value,
                None => {
                    seen.insert(name.clone(), rendered.len());
                    rendered.push((name, value));
                }
            }
        }
        rendered
    }

    /// Builder method to set a value and return self
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Node>) -> Self {
        self.insert(key, value);
        self
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get_key(key) == Some(value))
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            match key {
                Key::Text(s) => write!(f, "{s:?}: ")?,
                other => write!(f, "{other}: ")?,
            }
            write!(f, "{value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl<K: Into<Key>, V: Into<Node>> FromIterator<(K, V)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Mapping::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K: Into<Key>, V: Into<Node>> Extend<(K, V)> for Mapping {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Mapping {
    type Item = (Key, Node);
    type IntoIter = std::vec::IntoIter<(Key, Node)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

type SplitEntry<'a> = fn(&'a (Key, Node)) -> (&'a Key, &'a Node);

fn split_entry((key, value): &(Key, Node)) -> (&Key, &Node) {
    (key, value)
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a Key, &'a Node);
    type IntoIter = std::iter::Map<std::slice::Iter<'a, (Key, Node)>, SplitEntry<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().map(split_entry as SplitEntry<'a>)
    }
}

impl serde::Serialize for Mapping {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let entries = self.rendered_entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (name, value) in &entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> serde::Deserialize<'de> for Mapping {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match Node::deserialize(deserializer)? {
            Node::Mapping(map) => Ok(map),
            other => Err(serde::de::Error::custom(format!(
                "expected a mapping, found {}",
                other.type_name()
            ))),
        }
    }
}
