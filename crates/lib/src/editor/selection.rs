//! The selected node and the row highlight.

use std::time::Instant;

use crate::doc::{self, PathBuf, Value};

/// The node currently open in the property form.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Display key of the node.
    pub key: String,
    pub path: PathBuf,
    /// Last value seen at `path`.
    pub value: Value,
}

/// Result of checking a [`Selection`] against a newer document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staleness {
    /// The cached value still matches.
    Fresh,
    /// The value changed and the cache was updated.
    Refreshed,
    /// The path no longer resolves.
    Vanished,
}

impl Selection {
    pub fn new(key: impl Into<String>, path: PathBuf, value: Value) -> Self {
        Self {
            key: key.into(),
            path,
            value,
        }
    }

    /// Re-resolves the path in `document` and updates the cached value.
    pub fn refresh(&mut self, document: &Value) -> Staleness {
        match doc::get(document, &self.path) {
            Ok(Some(current)) if *current == self.value => Staleness::Fresh,
            Ok(Some(current)) => {
                self.value = current.clone();
                Staleness::Refreshed
            }
            Ok(None) | Err(_) => Staleness::Vanished,
        }
    }
}

/// A row marked after selection until `until`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub path: PathBuf,
    pub until: Instant,
}

impl Highlight {
    pub fn is_active(&self, now: Instant) -> bool {
        now < self.until
    }
}
