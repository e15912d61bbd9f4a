//! Memoized box sizes, keyed by element identity.

use std::collections::HashMap;
use std::rc::Rc;

use sizewatch_dom::NodeId;

use crate::box_sizes::BoxSizeCollection;

/// Box sizes computed so far, one shared entry per element.
///
/// The cache is owned by whoever drives observation. It never evicts on its
/// own; entries stay until [`invalidate`](Self::invalidate) or
/// [`clear`](Self::clear) is called, typically once per layout pass.
#[derive(Debug, Default)]
pub struct BoxSizeCache {
    entries: HashMap<NodeId, Rc<BoxSizeCollection>>,
}

impl BoxSizeCache {
    /// An empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached sizes for `element`, sharing the stored allocation.
    #[must_use]
    pub fn get(&self, element: NodeId) -> Option<Rc<BoxSizeCollection>> {
        self.entries.get(&element).map(Rc::clone)
    }

    /// Whether `element` has an entry.
    #[must_use]
    pub fn contains(&self, element: NodeId) -> bool {
        self.entries.contains_key(&element)
    }

    /// Store `sizes` for `element`, replacing any previous entry, and return
    /// the shared handle.
    pub fn insert(&mut self, element: NodeId, sizes: BoxSizeCollection) -> Rc<BoxSizeCollection> {
        let shared = Rc::new(sizes);
        let _previous = self.entries.insert(element, Rc::clone(&shared));
        shared
    }

    /// Drop the entry for `element`. Returns whether one existed.
    pub fn invalidate(&mut self, element: NodeId) -> bool {
        self.entries.remove(&element).is_some()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
