//! nth-arg - apply a function to one positional argument
//!
//! # Overview
//!
//! A selector picks the argument at index `n` out of an argument list and
//! hands it to a transform. Negative indices count from the end, so `-1` is
//! the last argument. When the index falls outside the list the transform
//! still runs and receives `None`.
//!
//! # Quick Start
//!
//! ```
//! use nth_arg::select;
//!
//! let double = select(1, |x: Option<&i64>| x.map(|x| x * 2));
//! assert_eq!(double.call(&[5, 10, 15]), Some(20));
//!
//! // Out of range: the transform sees `None`.
//! assert_eq!(double.call(&[5]), None);
//! ```
//!
//! # Curried Form
//!
//! Fix the index first and supply the transform later:
//!
//! ```
//! use nth_arg::select_curried;
//!
//! let last = select_curried(-1);
//! let squared = last.with(|x: Option<&i32>| x.map(|x| x * x));
//! assert_eq!(squared.call(&[2, 3, 4]), Some(16));
//! ```
//!
//! # Mixed Arguments
//!
//! Argument lists of different types use [`Value`] and the [`args!`] macro.
//! Transforms that need a present argument use [`required`], and their errors
//! come back from `call` untouched:
//!
//! ```
//! use nth_arg::{Error, Value, args, required, select};
//!
//! let joined = select(2, |x: Option<&Value>| required(x)?.join("-"));
//! assert_eq!(joined.call(&args![1, 2, [3, 4, 5]]), Ok("3-4-5".to_string()));
//! assert_eq!(joined.call(&args![1, 2]), Err(Error::Absent));
//! ```
//!
//! # Fractional Indices
//!
//! Floats truncate toward zero. Use [`Index::from_float`] with
//! [`Rounding::Floor`] to round down instead:
//!
//! ```
//! use nth_arg::{Index, Rounding, pick};
//!
//! let args = ['a', 'b', 'c'];
//! assert_eq!(pick(1.7, &args), Some(&'b'));
//! assert_eq!(pick(-1.7, &args), Some(&'c'));
//! assert_eq!(pick(Index::from_float(-1.7, Rounding::Floor), &args), Some(&'b'));
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

// Re-export public API from nth_arg_core
pub use nth_arg_core::{
    Curried, Error, Index, Result, Rounding, Selector, Value, args, pick, required, select,
    select_curried,
};
