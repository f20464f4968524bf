//! Errors raised by transforms.
//!
//! Selecting an argument never fails: an out-of-range index yields `None`.
//! These errors belong to transforms that need a present value, or a value
//! of a particular shape, and give up when they don't get one.

use thiserror::Error;

/// Result type alias using the transform [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors a transform can raise on the argument it was handed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The transform needed an argument but the index selected none.
    #[error("no argument at the selected position")]
    Absent,

    /// A [`Value`](crate::Value) extractor met a different variant.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

/// Unwrap a selected argument, failing with [`Error::Absent`] when there is none.
///
/// ```
/// use nth_arg_core::{Error, required, select};
///
/// let double = select(1, |x: Option<&i64>| required(x).map(|x| x * 2));
/// assert_eq!(double.call(&[5, 10, 15]), Ok(20));
/// assert_eq!(double.call(&[5]), Err(Error::Absent));
/// ```
#[inline]
pub fn required<T>(value: Option<T>) -> Result<T> {
    value.ok_or(Error::Absent)
}
