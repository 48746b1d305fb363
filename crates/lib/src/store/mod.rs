//! The document store.
//!
//! [`DocumentStore`] owns the live document. Every write goes through one of
//! its methods, which compute the next document with the functions in
//! [`crate::doc`], swap it in, bump the version and then call each subscriber
//! with the new document before returning.
//!
//! A failed write leaves the document, the version and the subscribers alone.

use std::fmt;

use tracing::{debug, warn};

use crate::{
    Result,
    doc::{self, Path, Value},
};

/// Callback invoked with the new document after every accepted write.
pub type Subscriber = Box<dyn FnMut(&Value)>;

/// Handle returned by [`DocumentStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Sole owner of the current document.
///
/// Writers take `&mut self`, so a subscriber cannot write back into the store
/// while it is being notified.
pub struct DocumentStore {
    current: Value,
    version: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentStore")
            .field("current", &self.current)
            .field("version", &self.version)
            .field("subscribers", &format!("<{} subscribers>", self.subscribers.len()))
            .finish()
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new(Value::default())
    }
}

impl DocumentStore {
    /// Creates a store holding `document` at version 0.
    pub fn new(document: Value) -> Self {
        Self {
            current: document,
            version: 0,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The live document.
    pub fn document(&self) -> &Value {
        &self.current
    }

    /// A cheap clone of the live document that stays valid after later writes.
    pub fn snapshot(&self) -> Value {
        self.current.clone()
    }

    /// Number of accepted writes since creation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Resolves `path` against the live document.
    pub fn get(&self, path: impl AsRef<Path>) -> Result<Option<&Value>> {
        doc::get(&self.current, path)
    }

    /// Swaps in a whole new document.
    pub fn replace(&mut self, document: Value) {
        self.commit(document, Path::root());
    }

    /// Sets the value at `path`.
    pub fn mutate(&mut self, path: impl AsRef<Path>, value: Value) -> Result<()> {
        let path = path.as_ref();
        self.try_commit(path, |current| doc::set(current, path, value))
    }

    /// Removes the node at `path`.
    pub fn delete_at(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.try_commit(path, |current| doc::remove(current, path))
    }

    /// Pushes `value` onto the sequence at `path`.
    pub fn append(&mut self, path: impl AsRef<Path>, value: Value) -> Result<()> {
        let path = path.as_ref();
        self.try_commit(path, |current| doc::append(current, path, value))
    }

    /// Renames the map key at `path`.
    pub fn rename(&mut self, path: impl AsRef<Path>, new_key: &str) -> Result<()> {
        let path = path.as_ref();
        self.try_commit(path, |current| doc::rename(current, path, new_key))
    }

    /// Adds property `name` to the map at `path`.
    pub fn add_property(&mut self, path: impl AsRef<Path>, name: &str, value: Value) -> Result<()> {
        let path = path.as_ref();
        self.try_commit(path, |current| doc::add_property(current, path, name, value))
    }

    /// Registers a callback for every later accepted write.
    ///
    /// Subscribers run in the order they subscribed.
    pub fn subscribe(&mut self, callback: impl FnMut(&Value) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    fn try_commit(
        &mut self,
        path: &Path,
        next: impl FnOnce(&Value) -> Result<Value>,
    ) -> Result<()> {
        match next(&self.current) {
            Ok(document) => {
                self.commit(document, path);
                Ok(())
            }
            Err(err) => {
                warn!(path = %path, error = %err, "rejected document write");
                Err(err)
            }
        }
    }

    fn commit(&mut self, document: Value, path: &Path) {
        self.current = document;
        self.version += 1;
        debug!(path = %path, version = self.version, "document updated");
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.current);
        }
    }
}
