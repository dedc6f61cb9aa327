//! Trove - lazily loaded, memoized collections
//!
//! # Overview
//!
//! A [`Collection`] is an ordered container whose elements may come from a
//! loader that only runs when the data is first needed. Common use cases
//! include:
//!
//! - Deferring an expensive query until a caller actually reads the result
//! - Handing out a collection before deciding where its elements come from
//! - Paging a large result set into fixed-size pages
//! - Reshaping elements with `map`, `filter` and `to_array` projections
//!
//! # Quick Start
//!
//! ```
//! use trove::{Collection, Yielded, collect};
//!
//! // Eager collection
//! let numbers = collect([1, 2, 3]);
//! assert_eq!(numbers.count().unwrap(), 3);
//!
//! // Lazy collection: the loader runs on first access, exactly once
//! let mut lazy = Collection::new();
//! lazy.set_loader(|| vec!["a", "b", "c", "d"]);
//! lazy.add("e").unwrap();
//! assert_eq!(lazy.to_vec().unwrap(), vec!["a", "b", "c", "d", "e"]);
//!
//! // Transforms build new, independent collections
//! let upper = lazy.map(|s| Yielded::Single(s.to_uppercase())).unwrap();
//! assert_eq!(upper.get(0).unwrap().map(String::as_str), Some("A"));
//!
//! let pages: Vec<_> = lazy.chunk(2).unwrap().collect();
//! assert_eq!(pages.len(), 3);
//! ```
//!
//! # Loader failures
//!
//! A loader bound with `set_try_loader` may fail. The failure is returned by
//! whichever operation triggered the load, nothing is memoized, and the next
//! access runs the loader again:
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use trove::{Collection, Error};
//!
//! let attempts = Rc::new(Cell::new(0));
//! let seen = Rc::clone(&attempts);
//!
//! let mut items = Collection::new();
//! items.set_try_loader(move || {
//!     seen.set(seen.get() + 1);
//!     if seen.get() == 1 { Err("not yet") } else { Ok(vec![1, 2]) }
//! });
//!
//! assert!(matches!(items.count(), Err(Error::Load(_))));
//! assert_eq!(items.count().unwrap(), 2);
//! assert_eq!(attempts.get(), 2);
//! ```

// Re-export public API from trove_core
pub use trove_core::{
    ArrayKey, Chunks, Collection, Error, Iter, LoadError, Loader, Projected, Projection, Result,
    Yielded,
};

/// Creates an eagerly populated collection from `items`.
///
/// ```
/// let letters = trove::collect("abc".chars());
/// assert_eq!(letters.get(2).unwrap(), Some(&'c'));
/// ```
pub fn collect<T>(items: impl IntoIterator<Item = T>) -> Collection<T> {
    items.into_iter().collect()
}
