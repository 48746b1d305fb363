//! Ordered map bodies for [`Value::Map`](super::Value::Map).

use std::sync::Arc;

use indexmap::IndexMap;

use super::Value;

/// String-keyed map that keeps keys in insertion order.
///
/// Entries live behind an [`Arc`], so clones share storage until one side is
/// written to. Writers go through [`Arc::make_mut`], which copies this level
/// only; child branches stay shared.
///
/// Equality compares entries in order.
#[derive(Debug, Clone, Default)]
pub struct Map {
    entries: Arc<IndexMap<String, Value>>,
}

impl Map {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the map contains `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Gets the value stored under `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Gets a mutable reference to the value under `key`, unsharing this level.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        if !self.entries.contains_key(key) {
            return None;
        }
        Arc::make_mut(&mut self.entries).get_mut(key)
    }

    /// Inserts a value, returning the previous one.
    ///
    /// An existing key keeps its position; a new key goes last.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        Arc::make_mut(&mut self.entries).insert(key.into(), value)
    }

    /// Removes `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        if !self.entries.contains_key(key) {
            return None;
        }
        Arc::make_mut(&mut self.entries).shift_remove(key)
    }

    /// Renames `from` to `to` in place. Returns false if `from` is missing.
    ///
    /// The caller is responsible for `to` not already being present.
    pub fn rename(&mut self, from: &str, to: impl Into<String>) -> bool {
        let Some(index) = self.entries.get_index_of(from) else {
            return false;
        };
        let entries = Arc::make_mut(&mut self.entries);
        if let Some((_, value)) = entries.shift_remove_index(index) {
            entries.shift_insert(index, to.into(), value);
        }
        true
    }

    /// Iterates over keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over values in order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Iterates over entries in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns true if both maps point at the same storage.
    pub fn ptr_eq(&self, other: &Map) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.iter().eq(other.iter())
    }
}

impl Eq for Map {}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        for (key, value) in iter {
            map.insert(key, value.into());
        }
        map
    }
}
