use std::hash::Hash;

use ahash::AHashMap;
use parking_lot::RwLock;

/// Decoded rows keyed by their lookup key.
pub struct RowCache<K, V> {
    inner: RwLock<AHashMap<K, V>>,
}

impl<K: Eq + Hash, V: Clone> RowCache<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(AHashMap::new()),
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.read().get(key).cloned()
    }

    pub fn insert(&self, key: K, value: V) {
        self.inner.write().insert(key, value);
    }

    pub fn remove(&self, key: &K) {
        self.inner.write().remove(key);
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl<K: Eq + Hash, V: Clone> Default for RowCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
