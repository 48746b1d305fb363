//! Sequence bodies for [`Value::List`](super::Value::List).

use std::sync::Arc;

use super::Value;

/// Ordered sequence of values addressed by index.
///
/// Like [`Map`](super::Map), the elements sit behind an [`Arc`] and are
/// copied one level at a time on write. Removal shifts later elements down,
/// so a list never has holes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct List {
    items: Arc<Vec<Value>>,
}

impl List {
    /// Creates a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gets the element at `index`
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Gets a mutable reference to the element at `index`, unsharing this level.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        if index >= self.items.len() {
            return None;
        }
        Arc::make_mut(&mut self.items).get_mut(index)
    }

    /// Appends an element
    pub fn push(&mut self, value: Value) {
        Arc::make_mut(&mut self.items).push(value);
    }

    /// Replaces the element at `index`, returning the old one.
    pub fn set(&mut self, index: usize, value: Value) -> Option<Value> {
        self.get_mut(index)
            .map(|slot| std::mem::replace(slot, value))
    }

    /// Removes the element at `index`; later elements shift down by one.
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index >= self.items.len() {
            return None;
        }
        Some(Arc::make_mut(&mut self.items).remove(index))
    }

    /// Iterates over elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Returns true if both lists point at the same storage.
    pub fn ptr_eq(&self, other: &List) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }
}

impl<V: Into<Value>> FromIterator<V> for List {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        List::from(iter.into_iter().map(Into::into).collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
