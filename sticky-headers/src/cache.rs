use alloc::rc::Rc;

use crate::key::{HeaderKey, HeaderMap};

/// A bounded map from header key to realized header view.
///
/// Eviction is clear-all: when an insert would make the map reach `max_len`, every entry is
/// dropped before the new one goes in. Views are stored behind `Rc`, so a caller holding one
/// keeps it alive across a clear.
#[derive(Clone, Debug)]
pub struct HeaderCache<K, V> {
    entries: HeaderMap<K, Rc<V>>,
    max_len: usize,
}

impl<K: HeaderKey, V> HeaderCache<K, V> {
    pub fn new(max_len: usize) -> Self {
        Self {
            entries: HeaderMap::new(),
            max_len,
        }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key).map(|view| &**view)
    }

    pub fn get_shared(&self, key: &K) -> Option<&Rc<V>> {
        self.entries.get(key)
    }

    /// Inserts `view` under `key`, clearing the whole cache first if the insert would reach
    /// the bound. Returns the stored view.
    ///
    /// If `key` is already cached, the existing view is kept and `view` is dropped.
    pub fn insert(&mut self, key: K, view: V) -> &Rc<V> {
        if !self.entries.contains_key(&key) && self.entries.len().saturating_add(1) >= self.max_len
        {
            shwarn!(
                ?key,
                len = self.entries.len(),
                max = self.max_len,
                "HeaderCache: bound reached, clearing"
            );
            self.entries.clear();
        }
        self.entries.entry(key).or_insert_with(|| Rc::new(view))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates cached entries in the map's native order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, view)| (key, &**view))
    }
}
