#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Lazily loaded collections.
//!
//! A [`Collection`] is backed either by the elements it was built with or by a
//! [`Loader`] bound later. The first operation that needs element data runs the
//! loader once and freezes its output into a snapshot; every later operation
//! works on that snapshot.

// This works on std and no_std and is harmless.
extern crate alloc;

// Exports some symbols publicly so downstream crates can stay `no_std` too.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{
        boxed::Box,
        string::{String, ToString},
        vec,
        vec::Vec,
    };
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod chunk;
pub mod collection;
pub mod error;
pub mod loader;
pub mod projection;
#[cfg(feature = "serde")]
pub mod serde;
mod slice;
pub mod yielded;

pub use chunk::Chunks;
pub use collection::{Collection, Iter};
pub use error::{Error, LoadError, Result};
pub use loader::Loader;
pub use projection::{ArrayKey, Projection};
pub use yielded::{Projected, Yielded};

#[cfg(test)]
mod chunk_test;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_loader_retry() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
