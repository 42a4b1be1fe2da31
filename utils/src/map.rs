use std::hash::Hash;

use fnv::FnvHashMap;

/// FNV-hashed map for small, hot, integer-keyed lookups.
pub struct Map<K, V>(pub FnvHashMap<K, V>);

impl<K: Eq + Hash, V> Map<K, V> {
    pub fn new() -> Self {
        Self(FnvHashMap::<K, V>::default())
    }

    pub fn get(&self, k: &K) -> Option<&V> {
        self.0.get(k)
    }

    /// Returns the value stored under `k`, inserting `f()` first if absent.
    pub fn get_or_insert_with<F: FnOnce() -> V>(&mut self, k: K, f: F) -> &mut V {
        self.0.entry(k).or_insert_with(f)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
