//! Selecting one positional argument and applying a transform to it.
//!
//! Two ways to build a [`Selector`]:
//!
//! - [`select`] takes the index and the transform together;
//! - [`select_curried`] takes only the index and returns a [`Curried`] that
//!   waits for the transform.
//!
//! Both produce the same selector. The transform always runs, and receives
//! `None` when the index falls outside the argument list. What it does with
//! `None` is up to the transform: the selector itself never fails.

use crate::index::Index;
use core::fmt;

/// Pick the argument at `n`, or `None` when `n` is out of range.
///
/// ```
/// use nth_arg_core::pick;
///
/// let args = ["a", "b", "c"];
/// assert_eq!(pick(0, &args), Some(&"a"));
/// assert_eq!(pick(-1, &args), Some(&"c"));
/// assert_eq!(pick(3, &args), None);
/// assert_eq!(pick(-4, &args), None);
/// ```
#[inline]
pub fn pick<T>(n: impl Into<Index>, args: &[T]) -> Option<&T> {
    n.into().resolve(args.len()).map(|position| &args[position])
}

/// Build a selector applying `transform` to the argument at `n`.
///
/// ```
/// use nth_arg_core::select;
///
/// let double = select(1, |x: Option<&i64>| x.map(|x| x * 2));
/// assert_eq!(double.call(&[5, 10, 15]), Some(20));
/// assert_eq!(double.call(&[5]), None);
/// ```
#[inline]
pub fn select<F>(n: impl Into<Index>, transform: F) -> Selector<F> {
    Selector {
        index: n.into(),
        transform,
    }
}

/// Fix the index now and supply the transform later.
///
/// `select_curried(n).with(f)` is the same selector as `select(n, f)`.
///
/// ```
/// use nth_arg_core::select_curried;
///
/// let second = select_curried(1);
/// let len = second.with(|s: Option<&&str>| s.map_or(0, |s| s.len()));
/// assert_eq!(len.call(&["hello", "world!"]), 6);
/// ```
#[inline]
pub fn select_curried(n: impl Into<Index>) -> Curried {
    Curried { index: n.into() }
}

/// An index waiting for its transform. See [`select_curried`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Curried {
    index: Index,
}

impl Curried {
    #[inline]
    pub fn index(&self) -> Index {
        self.index
    }

    /// Supply the transform, producing the final selector.
    ///
    /// `Curried` is `Copy`, so one curried index can feed any number of
    /// transforms.
    #[inline]
    pub fn with<F>(self, transform: F) -> Selector<F> {
        select(self.index, transform)
    }
}

/// A transform bound to an argument position.
#[derive(Clone, Copy)]
pub struct Selector<F> {
    index: Index,
    transform: F,
}

impl<F> Selector<F> {
    #[inline]
    pub fn index(&self) -> Index {
        self.index
    }

    #[inline]
    pub fn transform(&self) -> &F {
        &self.transform
    }

    #[inline]
    pub fn into_parts(self) -> (Index, F) {
        (self.index, self.transform)
    }

    /// Apply the transform to the selected argument of `args`.
    ///
    /// Whatever the transform returns is returned unchanged, including the
    /// errors of a fallible transform.
    #[inline]
    pub fn call<'a, T, U>(&self, args: &'a [T]) -> U
    where
        F: Fn(Option<&'a T>) -> U,
    {
        (self.transform)(pick(self.index, args))
    }

    /// Like [`call`](Self::call), but takes ownership of the arguments and
    /// moves the selected one into the transform. The rest are dropped.
    ///
    /// ```
    /// use nth_arg_core::select;
    ///
    /// let last = select(-1, |s: Option<String>| s.unwrap_or_default());
    /// let args = vec![String::from("hello"), String::from("world")];
    /// assert_eq!(last.call_owned(args), "world");
    /// ```
    pub fn call_owned<T, U, I>(&self, args: I) -> U
    where
        F: Fn(Option<T>) -> U,
        I: IntoIterator<Item = T>,
    {
        // Resolving a negative index needs the length up front.
        let args: crate::Vec<T> = args.into_iter().collect();
        let selected = self
            .index
            .resolve(args.len())
            .and_then(|position| args.into_iter().nth(position));
        (self.transform)(selected)
    }
}

impl<F> fmt::Debug for Selector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector")
            .field("index", &self.index)
            .field("transform", &core::any::type_name::<F>())
            .finish()
    }
}
