//! Auto-vivifying ordered mapping used to accumulate section configuration.
//!
//! [`AutoMap`] lets builders write deeply nested paths without declaring the
//! intermediate levels first:
//!
//! ```
//! use spack_site::AutoMap;
//! use serde_json::json;
//!
//! let mut map = AutoMap::new();
//! map.child("config").child("settings").set("theme", "dark");
//! assert_eq!(map.to_dict(), json!({"config": {"settings": {"theme": "dark"}}}));
//! ```
//!
//! Reading a missing key through [`AutoMap::get_or_create`] (or `IndexMut`)
//! inserts an empty child map. Shared indexing cannot insert, so `map["k"]`
//! on a `&AutoMap` panics when `k` is absent. Use [`AutoMap::get`] for a
//! lookup that neither mutates the map nor panics.

use std::ops::{Index, IndexMut};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// A value stored in an [`AutoMap`].
///
/// Mappings are always held as nested [`AutoMap`]s; sequences and scalars are
/// kept as plain [`serde_json::Value`]s. Mappings nested inside sequences stay
/// plain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// Nested auto-vivifying mapping.
    Map(AutoMap),
    /// Scalar or sequence leaf.
    Value(Value),
}

impl Node {
    /// Returns the nested map, if this node holds one.
    #[must_use]
    pub const fn as_map(&self) -> Option<&AutoMap> {
        match self {
            Self::Map(map) => Some(map),
            Self::Value(_) => None,
        }
    }

    /// Returns the nested map mutably, if this node holds one.
    pub fn as_map_mut(&mut self) -> Option<&mut AutoMap> {
        match self {
            Self::Map(map) => Some(map),
            Self::Value(_) => None,
        }
    }

    /// Returns the leaf value, if this node is not a map.
    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Map(_) => None,
            Self::Value(value) => Some(value),
        }
    }

    /// Returns the sequence stored in this node for in-place appends.
    pub fn as_seq_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Self::Value(Value::Array(items)) => Some(items),
            _ => None,
        }
    }

    /// Reports whether this node holds a nested map.
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Converts the node into a plain [`serde_json::Value`].
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Map(map) => map.to_dict(),
            Self::Value(value) => value.clone(),
        }
    }
}

impl From<AutoMap> for Node {
    fn from(map: AutoMap) -> Self {
        Self::Map(map)
    }
}

impl From<Value> for Node {
    /// Objects (and every object nested directly beneath them) become
    /// [`AutoMap`]s; arrays and scalars are stored as-is.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(object) => Self::Map(AutoMap::from(object)),
            other => Self::Value(other),
        }
    }
}

impl From<Map<String, Value>> for Node {
    fn from(object: Map<String, Value>) -> Self {
        Self::Map(AutoMap::from(object))
    }
}

impl From<Vec<Value>> for Node {
    fn from(items: Vec<Value>) -> Self {
        Self::Value(Value::Array(items))
    }
}

impl From<Vec<String>> for Node {
    fn from(items: Vec<String>) -> Self {
        Self::Value(Value::Array(items.into_iter().map(Value::String).collect()))
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Value(Value::String(value.to_owned()))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Value(Value::String(value))
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Self::Value(Value::Bool(value))
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<u32> for Node {
    fn from(value: u32) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<u64> for Node {
    fn from(value: u64) -> Self {
        Self::Value(Value::from(value))
    }
}

/// Ordered mapping whose missing keys spring into existence as empty maps.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AutoMap {
    entries: IndexMap<String, Node>,
}

impl AutoMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node stored at `key`, inserting an empty [`AutoMap`] first
    /// when the key is absent.
    ///
    /// A miss therefore mutates the map: a subsequent
    /// [`contains_key`](Self::contains_key) is always `true`.
    pub fn get_or_create(&mut self, key: &str) -> &mut Node {
        self.entries
            .entry(key.to_owned())
            .or_insert_with(|| Node::Map(Self::new()))
    }

    /// Returns the nested map at `key`, creating it on a miss.
    ///
    /// A scalar or sequence already stored at `key` is replaced by an empty
    /// map, keeping its position in the key order.
    #[expect(
        clippy::unreachable,
        reason = "the slot holds a map once any leaf has been replaced"
    )]
    pub fn child(&mut self, key: &str) -> &mut Self {
        let slot = self.get_or_create(key);
        if let Node::Value(previous) = slot {
            tracing::debug!(key, ?previous, "replacing leaf value with nested map");
            *slot = Node::Map(Self::new());
        }
        match slot {
            Node::Map(map) => map,
            Node::Value(_) => unreachable!("leaf values are replaced above"),
        }
    }

    /// Looks up `key` without creating it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    /// Looks up `key` mutably without creating it.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries.get_mut(key)
    }

    /// Reports whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Stores `value` at `key`, replacing any previous value wholesale.
    ///
    /// Plain mappings are promoted to [`AutoMap`]s recursively; an existing
    /// [`AutoMap`] is moved in unchanged. An existing key keeps its position.
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Node>,
    {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes `key`, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Node> {
        self.entries.shift_remove(key)
    }

    /// Number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the map has no top-level keys. Nested maps are not
    /// inspected, so a map holding only an empty child is not empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over top-level keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over top-level entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Converts the whole tree into a plain [`serde_json::Value::Object`],
    /// preserving key order at every level.
    #[must_use]
    pub fn to_dict(&self) -> Value {
        Value::Object(self.to_object())
    }

    /// Like [`to_dict`](Self::to_dict) but returns the object map directly.
    #[must_use]
    pub fn to_object(&self) -> Map<String, Value> {
        self.entries
            .iter()
            .map(|(key, node)| (key.clone(), node.to_value()))
            .collect()
    }
}

impl From<Map<String, Value>> for AutoMap {
    fn from(object: Map<String, Value>) -> Self {
        let entries = object
            .into_iter()
            .map(|(key, value)| (key, Node::from(value)))
            .collect();
        Self { entries }
    }
}

impl<K, V> FromIterator<(K, V)> for AutoMap
where
    K: Into<String>,
    V: Into<Node>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self { entries }
    }
}

impl Index<&str> for AutoMap {
    type Output = Node;

    /// # Panics
    ///
    /// Panics if `key` is absent. Indexing mutably creates the key instead.
    fn index(&self, key: &str) -> &Node {
        match self.entries.get(key) {
            Some(node) => node,
            None => panic!("key `{key}` not present in AutoMap"),
        }
    }
}

impl IndexMut<&str> for AutoMap {
    fn index_mut(&mut self, key: &str) -> &mut Node {
        self.get_or_create(key)
    }
}
