#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Positional argument selection.
//!
//! A [`Selector`] pairs an [`Index`] with a transform. Calling it with an
//! argument list picks the argument at that index (negative indices count
//! from the end) and hands it to the transform as an `Option`: `None` when
//! the index falls outside the list.

// Needed so that macros can uniformly refer to `::nth_arg_core` and still work
// from within this crate or a different one.
extern crate self as nth_arg_core;

// This works on std and no_std and is harmless.
extern crate alloc;

// Exports some symbols publicly basically so that macros can always refer to these.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, fmt, format, string::String, string::ToString, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod error;
pub mod index;
pub mod selector;
pub mod value;

pub use error::{Error, Result, required};
pub use index::{Index, Rounding};
pub use selector::{Curried, Selector, pick, select, select_curried};
pub use value::Value;

#[cfg(test)]
mod error_test;
#[cfg(test)]
mod index_test;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with TRACE level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_out_of_range() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
            )
            .with_test_writer()
            .try_init();
    }
}
