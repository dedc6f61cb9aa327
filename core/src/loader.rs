//! Pluggable element producers.
//!
//! A [`Loader`] is a zero-argument function that supplies a collection's
//! elements on demand. Whatever shape the caller's function returns (a plain
//! sequence, a keyed sequence, or a fallible result) is normalized here into
//! a compact `Vec<T>`, so the collection only ever deals with one signature.

use crate::error::LoadError;
use crate::{Box, Vec};
use core::fmt;

type Produce<T> = dyn Fn() -> Result<Vec<T>, LoadError>;

/// A boxed, re-invocable element producer.
///
/// A collection calls its loader at most once per successful materialization.
/// It is only called again when the previous call failed.
///
/// Loaders may close over data the caller shares elsewhere. Keeping that data
/// stable until the collection is materialized is the caller's business.
pub struct Loader<T> {
    produce: Box<Produce<T>>,
}

impl<T: 'static> Loader<T> {
    /// Wraps an infallible producer of an ordered sequence.
    pub fn new<F, I>(produce: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = T> + 'static,
    {
        Self {
            produce: Box::new(move || Ok(produce().into_iter().collect())),
        }
    }

    /// Wraps a producer that may fail.
    pub fn fallible<F, I, E>(produce: F) -> Self
    where
        F: Fn() -> Result<I, E> + 'static,
        I: IntoIterator<Item = T> + 'static,
        E: Into<LoadError> + 'static,
    {
        Self {
            produce: Box::new(move || match produce() {
                Ok(items) => Ok(items.into_iter().collect()),
                Err(err) => Err(err.into()),
            }),
        }
    }

    /// Wraps a producer of `(key, element)` pairs. Keys are dropped and the
    /// elements are re-indexed from zero in the order they were produced.
    pub fn keyed<F, I, K>(produce: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = (K, T)> + 'static,
        K: 'static,
    {
        Self {
            produce: Box::new(move || Ok(produce().into_iter().map(|(_, item)| item).collect())),
        }
    }
}

impl<T> Loader<T> {
    /// Runs the producer.
    pub fn load(&self) -> Result<Vec<T>, LoadError> {
        (self.produce)()
    }
}

impl<T> fmt::Debug for Loader<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Loader")
            .field("element_type", &core::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}
