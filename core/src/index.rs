//! Signed argument indices and their resolution against a sequence length.

use core::fmt;

/// How a fractional index is turned into an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Drop the fraction: `1.7 → 1`, `-1.7 → -1`.
    #[default]
    TowardZero,
    /// Round down: `1.7 → 1`, `-1.7 → -2`.
    Floor,
}

/// A position in an argument list.
///
/// Non-negative values count from the start (`0` is the first argument),
/// negative values count from the end (`-1` is the last argument).
///
/// Built from any primitive integer, or from a float. Floats convert the way
/// `as` casts them: the fraction is dropped toward zero, `NaN` becomes `0`,
/// and infinities or out-of-range magnitudes saturate, which never resolve.
///
/// ```
/// use nth_arg_core::{Index, Rounding};
///
/// assert_eq!(Index::from(1.7).get(), 1);
/// assert_eq!(Index::from(-1.7).get(), -1);
/// assert_eq!(Index::from_float(-1.7, Rounding::Floor).get(), -2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(i64);

impl Index {
    /// The first argument.
    pub const FIRST: Index = Index(0);
    /// The last argument.
    pub const LAST: Index = Index(-1);

    #[inline]
    pub const fn new(n: i64) -> Self {
        Self(n)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Whether this index counts from the end of the sequence.
    #[inline]
    pub const fn is_from_end(self) -> bool {
        self.0 < 0
    }

    /// Build an index from a float with an explicit rounding policy.
    pub fn from_float(value: f64, rounding: Rounding) -> Self {
        // `as` truncates toward zero, maps NaN to 0 and saturates at the i64 bounds.
        let truncated = value as i64;
        match rounding {
            Rounding::TowardZero => Self(truncated),
            Rounding::Floor if (truncated as f64) > value => Self(truncated.saturating_sub(1)),
            Rounding::Floor => Self(truncated),
        }
    }

    /// Map this index onto a sequence of `len` elements.
    ///
    /// Returns `None` when the position falls outside `0..len`.
    pub fn resolve(self, len: usize) -> Option<usize> {
        let position = if self.0 >= 0 {
            usize::try_from(self.0).ok()
        } else {
            usize::try_from(self.0.unsigned_abs())
                .ok()
                .and_then(|from_end| len.checked_sub(from_end))
        };

        match position {
            Some(position) if position < len => Some(position),
            _ => {
                tracing::trace!(index = self.0, len, "index out of range");
                None
            }
        }
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! index_from_lossless {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Index {
                #[inline]
                fn from(n: $ty) -> Self {
                    Self(i64::from(n))
                }
            }
        )*
    };
}

index_from_lossless!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! index_from_saturating {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Index {
                #[inline]
                fn from(n: $ty) -> Self {
                    Self(i64::try_from(n).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

index_from_saturating!(u64, usize);

impl From<isize> for Index {
    #[inline]
    fn from(n: isize) -> Self {
        // isize is at most 64 bits on every supported target.
        Self(n as i64)
    }
}

impl From<f64> for Index {
    #[inline]
    fn from(value: f64) -> Self {
        Self::from_float(value, Rounding::TowardZero)
    }
}

impl From<f32> for Index {
    #[inline]
    fn from(value: f32) -> Self {
        Self::from_float(f64::from(value), Rounding::TowardZero)
    }
}
