//! Tagged results for transform callbacks.
//!
//! `map` and `to_array` accept callbacks that either produce one value per
//! element or expand an element into a lazy sequence. The callback says which
//! one it did by returning the matching variant.

use crate::Box;
use core::fmt;

/// Output of a [`map`](crate::Collection::map) callback.
///
/// # Example
///
/// ```
/// use trove_core::{Collection, Yielded};
///
/// let words = Collection::from(vec!["a b", "c"]);
/// let split = words.map(|&line| Yielded::many(line.split(' '))).unwrap();
/// assert_eq!(split.to_vec().unwrap(), vec!["a", "b", "c"]);
/// ```
pub enum Yielded<'a, T> {
    /// Exactly one output element.
    Single(T),
    /// Zero or more output elements, pulled in order. An empty sequence
    /// contributes nothing.
    Many(Box<dyn Iterator<Item = T> + 'a>),
}

impl<'a, T> Yielded<'a, T> {
    /// Wraps any iterable as a lazy sequence of outputs.
    pub fn many<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Yielded::Many(Box::new(values.into_iter()))
    }

    /// A sequence that yields nothing.
    pub fn none() -> Self
    where
        T: 'a,
    {
        Yielded::Many(Box::new(core::iter::empty()))
    }
}

impl<T: fmt::Debug> fmt::Debug for Yielded<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Yielded::Single(value) => f.debug_tuple("Single").field(value).finish(),
            Yielded::Many(_) => f.debug_tuple("Many").finish_non_exhaustive(),
        }
    }
}

/// Output of a [`to_array`](crate::Collection::to_array) callback.
pub enum Projected<'a, K, V> {
    /// Appended positionally, at the next free index.
    Value(V),
    /// Merged by key. A later pair overwrites an earlier one with the same key.
    Pairs(Box<dyn Iterator<Item = (K, V)> + 'a>),
}

impl<'a, K, V> Projected<'a, K, V> {
    /// Wraps any iterable of key-value pairs.
    pub fn pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        I::IntoIter: 'a,
    {
        Projected::Pairs(Box::new(pairs.into_iter()))
    }

    /// A single keyed entry.
    pub fn pair(key: K, value: V) -> Self
    where
        K: 'a,
        V: 'a,
    {
        Projected::Pairs(Box::new(core::iter::once((key, value))))
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Projected<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Projected::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Projected::Pairs(_) => f.debug_tuple("Pairs").finish_non_exhaustive(),
        }
    }
}
