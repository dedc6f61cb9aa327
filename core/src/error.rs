//! Error types for collection operations.
//!
//! Only two things can go wrong: a caller passes an argument outside an
//! operation's contract, or the bound loader fails while the snapshot is being
//! built. A missing element is not an error; lookups return `Option`.

use crate::Box;
use thiserror::Error;

/// Failure reported by a fallible loader.
pub type LoadError = Box<dyn core::error::Error + Send + Sync>;

/// Convenience alias used by every operation that materializes a collection.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// `chunk` was asked for pages of zero elements.
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,

    /// The loader failed. No snapshot was stored, so the next access runs the
    /// loader again.
    #[error("collection loader failed: {0}")]
    Load(#[source] LoadError),
}

impl Error {
    /// Returns the loader failure, if this error carries one.
    pub fn load_error(&self) -> Option<&(dyn core::error::Error + Send + Sync + 'static)> {
        match self {
            Error::Load(err) => Some(err.as_ref()),
            Error::InvalidChunkSize => None,
        }
    }
}
