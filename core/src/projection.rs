//! Insertion-ordered key/value result of [`Collection::to_array`].
//!
//! [`Collection::to_array`]: crate::Collection::to_array

use crate::Vec;
use core::hash::Hash;
use hashbrown::DefaultHashBuilder;
use indexmap::IndexMap;

/// Key of a [`Projection`] entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArrayKey<K> {
    /// Position assigned to a value appended without a key.
    Index(usize),
    /// Key supplied by the transform.
    Key(K),
}

/// Ordered mapping built by `to_array`.
///
/// Positional values get consecutive `ArrayKey::Index` keys starting at zero,
/// independent of any keyed entries around them. Re-inserting an existing key
/// replaces the value but keeps the entry where it was first inserted.
/// `Key(0)` and `Index(0)` are distinct entries here; serializing a projection
/// where they would encode to the same map key fails instead.
#[derive(Debug, Clone)]
pub struct Projection<K, V> {
    entries: IndexMap<ArrayKey<K>, V, DefaultHashBuilder>,
    next_index: usize,
}

impl<K: Hash + Eq, V> Projection<K, V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::default(),
            next_index: 0,
        }
    }

    /// Appends `value` at the next free index.
    pub fn push(&mut self, value: V) {
        self.entries.insert(ArrayKey::Index(self.next_index), value);
        self.next_index += 1;
    }

    /// Inserts under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(ArrayKey::Key(key), value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &ArrayKey<K>) -> Option<&V> {
        self.entries.get(key)
    }

    /// Looks up an entry inserted with a transform-supplied key.
    pub fn get_key(&self, key: K) -> Option<&V> {
        self.entries.get(&ArrayKey::Key(key))
    }

    /// Looks up a positionally appended value.
    pub fn get_index(&self, index: usize) -> Option<&V> {
        self.entries.get(&ArrayKey::Index(index))
    }

    /// True when every entry was appended positionally, in which case the
    /// projection is just a list.
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .all(|key| matches!(key, ArrayKey::Index(_)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ArrayKey<K>, &V)> + '_ {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &ArrayKey<K>> + '_ {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.values()
    }

    /// Drops the keys and returns the values in entry order.
    pub fn into_values(self) -> Vec<V> {
        self.entries.into_values().collect()
    }
}

impl<K: Hash + Eq, V> Default for Projection<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for Projection<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Hash + Eq, V: Eq> Eq for Projection<K, V> {}

/// Builds a keyed projection, as if every pair had come from `to_array`.
impl<K: Hash + Eq, V> FromIterator<(K, V)> for Projection<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut projection = Self::new();
        projection.extend(iter);
        projection
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for Projection<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
