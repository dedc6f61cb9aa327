//! The lazily materialized collection.
//!
//! A [`Collection`] starts out holding either the elements it was built with or
//! a [`Loader`]. Nothing is read until an operation needs element data; that
//! first access builds the *snapshot* and every later operation, including
//! `add`, works on the same snapshot.
//!
//! # Example
//!
//! ```
//! use trove_core::{Collection, Yielded};
//!
//! let mut numbers = Collection::lazy(|| vec![1, 2, 3, 4]);
//! numbers.add(5).unwrap();
//!
//! assert_eq!(numbers.count().unwrap(), 5);
//! assert_eq!(numbers.get(0).unwrap(), Some(&1));
//! assert_eq!(numbers.get(10).unwrap(), None);
//!
//! let doubled = numbers.map(|n| Yielded::Single(n * 2)).unwrap();
//! assert_eq!(doubled.to_vec().unwrap(), vec![2, 4, 6, 8, 10]);
//! ```

use crate::chunk::Chunks;
use crate::error::{Error, LoadError, Result};
use crate::loader::Loader;
use crate::projection::Projection;
use crate::slice;
use crate::yielded::{Projected, Yielded};
use crate::Vec;
use core::cell::Cell;
use core::fmt;
use core::hash::Hash;
use core::iter::{Enumerate, FusedIterator};
use once_cell::unsync::OnceCell;

/// An ordered, index-addressable collection with deferred population.
///
/// The snapshot is built at most once per successful load. Rebinding the
/// loader after that point has no effect on the snapshot: the new loader is
/// stored but never called.
///
/// Every collection returned by a transform (`map`, `filter`, `slice`,
/// `copy`, `chunk` pages) owns its own elements and has no loader, so
/// changing it never touches the collection it came from.
pub struct Collection<T> {
    /// Default backing elements, moved into the snapshot when no loader is bound.
    source: Cell<Vec<T>>,
    loader: Option<Loader<T>>,
    materialized: OnceCell<Vec<T>>,
}

impl<T> Collection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    /// Creates a collection that will be populated by `loader` on first access.
    pub fn with_loader(loader: Loader<T>) -> Self {
        let mut collection = Self::new();
        collection.loader = Some(loader);
        collection
    }

    /// Binds `loader` as the element producer.
    ///
    /// Once the collection is materialized this is inert: the loader is kept
    /// but the existing snapshot stays in place for the rest of the
    /// collection's life.
    pub fn bind(&mut self, loader: Loader<T>) -> &mut Self {
        if self.is_materialized() {
            tracing::debug!("Loader bound after materialization; it will not be invoked");
        }
        self.loader = Some(loader);
        self
    }

    /// Whether the snapshot has been built.
    pub fn is_materialized(&self) -> bool {
        self.materialized.get().is_some()
    }

    fn materialize(&self) -> Result<&Vec<T>> {
        self.materialized
            .get_or_try_init(|| load(self.loader.as_ref(), &self.source))
    }

    // ========================================================================
    // Element access
    // ========================================================================

    /// Number of elements.
    pub fn count(&self) -> Result<usize> {
        Ok(self.materialize()?.len())
    }

    /// True when the collection holds no elements.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.materialize()?.is_empty())
    }

    /// Element at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Result<Option<&T>> {
        Ok(self.materialize()?.get(index))
    }

    /// Appends `item` to the snapshot, materializing it first if needed.
    ///
    /// Adding before the first read therefore keeps the loader's elements in
    /// front of the new one.
    pub fn add(&mut self, item: T) -> Result<&mut Self> {
        let mut items = match self.materialized.take() {
            Some(items) => items,
            None => load(self.loader.as_ref(), &self.source)?,
        };
        items.push(item);
        self.materialized = OnceCell::with_value(items);
        Ok(self)
    }

    /// The snapshot as a slice.
    pub fn as_slice(&self) -> Result<&[T]> {
        Ok(self.materialize()?.as_slice())
    }

    /// Forward traversal yielding `(index, element)` pairs.
    pub fn iter(&self) -> Result<Iter<'_, T>> {
        Ok(Iter {
            inner: self.materialize()?.iter().enumerate(),
        })
    }

    /// Calls `f` with each element and its index, in order.
    pub fn each<F>(&self, mut f: F) -> Result<&Self>
    where
        F: FnMut(&T, usize),
    {
        for (index, item) in self.materialize()?.iter().enumerate() {
            f(item, index);
        }
        Ok(self)
    }

    /// Consumes the collection and returns its snapshot.
    pub fn into_vec(self) -> Result<Vec<T>> {
        let Self {
            source,
            loader,
            materialized,
        } = self;
        match materialized.into_inner() {
            Some(items) => Ok(items),
            None => load(loader.as_ref(), &source),
        }
    }

    // ========================================================================
    // Transforms
    // ========================================================================

    /// Builds a new collection from the output of `f` for every element.
    ///
    /// `Yielded::Single` contributes one element. `Yielded::Many` is drained
    /// in order and each value it produces is added on its own; an empty
    /// sequence adds nothing. A sequence may borrow from the element it was
    /// produced from.
    pub fn map<'s, U, F>(&'s self, mut f: F) -> Result<Collection<U>>
    where
        F: FnMut(&'s T) -> Yielded<'s, U>,
    {
        let items = self.materialize()?;
        let mut mapped = Vec::with_capacity(items.len());
        for item in items {
            match f(item) {
                Yielded::Single(value) => mapped.push(value),
                Yielded::Many(values) => mapped.extend(values),
            }
        }
        Ok(Collection::from(mapped))
    }

    /// Left fold over the elements, starting from `initial`.
    pub fn reduce_with<A, F>(&self, initial: A, f: F) -> Result<A>
    where
        F: FnMut(A, &T) -> A,
    {
        Ok(self.materialize()?.iter().fold(initial, f))
    }

    /// Left fold starting from `A::default()`.
    pub fn reduce<A, F>(&self, f: F) -> Result<A>
    where
        A: Default,
        F: FnMut(A, &T) -> A,
    {
        self.reduce_with(A::default(), f)
    }

    /// Projects every element into an ordered key/value mapping.
    ///
    /// `Projected::Value` is appended at the next free index;
    /// `Projected::Pairs` is merged by key, later pairs overwriting earlier
    /// ones.
    pub fn to_array<'s, K, V, F>(&'s self, mut f: F) -> Result<Projection<K, V>>
    where
        K: Hash + Eq,
        F: FnMut(&'s T) -> Projected<'s, K, V>,
    {
        let mut projection = Projection::new();
        for item in self.materialize()? {
            match f(item) {
                Projected::Value(value) => projection.push(value),
                Projected::Pairs(pairs) => projection.extend(pairs),
            }
        }
        Ok(projection)
    }
}

impl<T: Clone> Collection<T> {
    /// Copies the snapshot out.
    pub fn to_vec(&self) -> Result<Vec<T>> {
        Ok(self.materialize()?.clone())
    }

    /// A new collection holding a contiguous run of elements.
    ///
    /// A negative `offset` counts from the end. `None` for `length` runs to the
    /// end and a negative `length` stops that many elements before it.
    pub fn slice(&self, offset: isize, length: Option<isize>) -> Result<Self> {
        let items = self.materialize()?;
        let range = slice::resolve(items.len(), offset, length);
        Ok(Self::from(items[range].to_vec()))
    }

    /// Same as `slice(0, None)`.
    pub fn copy(&self) -> Result<Self> {
        self.slice(0, None)
    }

    /// A new collection with the elements `predicate` accepts, in their
    /// original relative order.
    pub fn filter<F>(&self, mut predicate: F) -> Result<Self>
    where
        F: FnMut(&T) -> bool,
    {
        Ok(self
            .materialize()?
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect())
    }

    /// Splits the snapshot into pages of at most `size` elements.
    ///
    /// The collection is materialized right away and `size == 0` is rejected
    /// here rather than from inside the returned iterator.
    pub fn chunk(&self, size: usize) -> Result<Chunks<'_, T>> {
        if size == 0 {
            return Err(Error::InvalidChunkSize);
        }
        Ok(Chunks::new(self.materialize()?, size))
    }
}

impl<T: 'static> Collection<T> {
    /// Creates a collection populated by `produce` on first access.
    pub fn lazy<F, I>(produce: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = T> + 'static,
    {
        Self::with_loader(Loader::new(produce))
    }

    /// Binds an infallible producer. See [`Collection::bind`].
    pub fn set_loader<F, I>(&mut self, produce: F) -> &mut Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = T> + 'static,
    {
        self.bind(Loader::new(produce))
    }

    /// Binds a producer that may fail. A failure is reported by whichever
    /// operation triggered the load, and the next access tries again.
    pub fn set_try_loader<F, I, E>(&mut self, produce: F) -> &mut Self
    where
        F: Fn() -> core::result::Result<I, E> + 'static,
        I: IntoIterator<Item = T> + 'static,
        E: Into<LoadError> + 'static,
    {
        self.bind(Loader::fallible(produce))
    }

    /// Binds a producer of `(key, element)` pairs; keys are discarded.
    pub fn set_keyed_loader<F, I, K>(&mut self, produce: F) -> &mut Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = (K, T)> + 'static,
        K: 'static,
    {
        self.bind(Loader::keyed(produce))
    }
}

fn load<T>(loader: Option<&Loader<T>>, source: &Cell<Vec<T>>) -> Result<Vec<T>> {
    let items = match loader {
        Some(loader) => loader.load().map_err(|err| {
            tracing::debug!(error = %err, "Collection loader failed; snapshot left unset");
            Error::Load(err)
        })?,
        None => source.take(),
    };
    tracing::trace!(len = items.len(), "Materialized collection");
    Ok(items)
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            source: Cell::new(items),
            loader: None,
            materialized: OnceCell::new(),
        }
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

// Manual Debug: the loader is opaque and the pending source sits in a `Cell`.
impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("materialized", &self.materialized.get())
            .field("loader", &self.loader)
            .finish_non_exhaustive()
    }
}

/// Iterator over `(index, element)` pairs of a materialized collection.
///
/// Created by [`Collection::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'c, T> {
    inner: Enumerate<core::slice::Iter<'c, T>>,
}

impl<'c, T> Iterator for Iter<'c, T> {
    type Item = (usize, &'c T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
