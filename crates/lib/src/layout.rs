//! Size bookkeeping for measured layout containers.
//!
//! [`MultiSize`] tracks the last measured size of a set of keyed elements. The
//! host supplies a [`SizeObserver`] (a resize-observer binding, or a test
//! double) and reports measurements through [`MultiSize::on_resize`].
//!
//! Every element handed to the observer is eventually released: replacing or
//! clearing a key unobserves the old element, and detaching the observer (or
//! dropping the registry) disconnects it.

use std::{collections::HashMap, hash::Hash};

use tracing::trace;

/// Height reserved above the tree for the card header and padding.
pub const TREE_HEADER_ALLOWANCE: f64 = 80.0;

/// Smallest height the tree is given.
pub const MIN_TREE_HEIGHT: f64 = 200.0;

/// Host binding that reports size changes of elements.
pub trait SizeObserver<E> {
    fn observe(&mut self, element: &E);
    fn unobserve(&mut self, element: &E);
    /// Stops observing every element.
    fn disconnect(&mut self);
}

/// A measured size in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Rounds a fractional measurement to whole pixels. Negative input clamps to 0.
    pub fn rounded(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0).round() as u32,
            height: height.max(0.0).round() as u32,
        }
    }
}

/// Keyed registry of observed elements and their last known sizes.
#[derive(Debug)]
pub struct MultiSize<K, E, O>
where
    K: Eq + Hash + Clone,
    E: PartialEq,
    O: SizeObserver<E>,
{
    elements: HashMap<K, E>,
    sizes: HashMap<K, Size>,
    observer: Option<O>,
}

impl<K, E, O> Default for MultiSize<K, E, O>
where
    K: Eq + Hash + Clone,
    E: PartialEq,
    O: SizeObserver<E>,
{
    fn default() -> Self {
        Self {
            elements: HashMap::new(),
            sizes: HashMap::new(),
            observer: None,
        }
    }
}

impl<K, E, O> MultiSize<K, E, O>
where
    K: Eq + Hash + Clone,
    E: PartialEq,
    O: SizeObserver<E>,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `element` under `key`, or clears the key when `None`.
    ///
    /// A previously registered element is unobserved first.
    pub fn set_ref(&mut self, key: K, element: Option<E>) {
        if let Some(previous) = self.elements.remove(&key) {
            if let Some(observer) = self.observer.as_mut() {
                observer.unobserve(&previous);
            }
        }
        if let Some(element) = element {
            if let Some(observer) = self.observer.as_mut() {
                observer.observe(&element);
            }
            self.elements.insert(key, element);
        }
    }

    /// Installs `observer` and starts observing every registered element.
    ///
    /// An observer that was already attached is disconnected first.
    pub fn attach(&mut self, mut observer: O) {
        self.detach();
        for element in self.elements.values() {
            observer.observe(element);
        }
        self.observer = Some(observer);
    }

    /// Disconnects and returns the current observer.
    pub fn detach(&mut self) -> Option<O> {
        let mut observer = self.observer.take()?;
        observer.disconnect();
        Some(observer)
    }

    pub fn is_attached(&self) -> bool {
        self.observer.is_some()
    }

    /// Records a measurement for `element`.
    ///
    /// Returns true if the stored size changed. Unknown elements are ignored.
    pub fn on_resize(&mut self, element: &E, width: f64, height: f64) -> bool {
        let Some(key) = self
            .elements
            .iter()
            .find(|(_, registered)| *registered == element)
            .map(|(key, _)| key.clone())
        else {
            return false;
        };
        let size = Size::rounded(width, height);
        if self.sizes.get(&key) == Some(&size) {
            return false;
        }
        trace!(width = size.width, height = size.height, "element resized");
        self.sizes.insert(key, size);
        true
    }

    /// Last recorded size for `key`.
    pub fn size(&self, key: &K) -> Option<Size> {
        self.sizes.get(key).copied()
    }

    /// All recorded sizes.
    pub fn sizes(&self) -> &HashMap<K, Size> {
        &self.sizes
    }
}

impl<K, E, O> Drop for MultiSize<K, E, O>
where
    K: Eq + Hash + Clone,
    E: PartialEq,
    O: SizeObserver<E>,
{
    fn drop(&mut self) {
        self.detach();
    }
}

/// Height available to the navigator tree inside a container of `nav_height`.
pub fn tree_height(nav_height: Option<f64>) -> f64 {
    (nav_height.unwrap_or(0.0) - TREE_HEADER_ALLOWANCE).max(MIN_TREE_HEIGHT)
}
