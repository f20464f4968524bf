//! Tests for index construction and resolution

use crate::index::{Index, Rounding};
use crate::test_utils::init_test_logging;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_from_integers() {
    assert_eq!(Index::from(3i8).get(), 3);
    assert_eq!(Index::from(-3i32).get(), -3);
    assert_eq!(Index::from(7u32).get(), 7);
    assert_eq!(Index::from(-2isize).get(), -2);
    assert_eq!(Index::from(i64::MIN).get(), i64::MIN);
}

#[test]
fn test_from_unsigned_saturates() {
    assert_eq!(Index::from(u64::MAX).get(), i64::MAX);
    assert_eq!(Index::from(usize::MAX).get(), i64::MAX);
    assert_eq!(Index::from(5usize).get(), 5);
}

#[test]
fn test_from_float_truncates_toward_zero() {
    assert_eq!(Index::from(1.7).get(), 1);
    assert_eq!(Index::from(0.999).get(), 0);
    assert_eq!(Index::from(-0.5).get(), 0);
    assert_eq!(Index::from(-1.7).get(), -1);
    assert_eq!(Index::from(2.5f32).get(), 2);
}

#[test]
fn test_from_float_floor() {
    assert_eq!(Index::from_float(1.7, Rounding::Floor).get(), 1);
    assert_eq!(Index::from_float(-1.7, Rounding::Floor).get(), -2);
    assert_eq!(Index::from_float(-2.0, Rounding::Floor).get(), -2);
    assert_eq!(Index::from_float(-0.5, Rounding::Floor).get(), -1);
    assert_eq!(Index::from_float(f64::NEG_INFINITY, Rounding::Floor).get(), i64::MIN);
}

#[test]
fn test_from_float_special_values() {
    assert_eq!(Index::from(f64::NAN).get(), 0);
    assert_eq!(Index::from(f64::INFINITY).get(), i64::MAX);
    assert_eq!(Index::from(f64::NEG_INFINITY).get(), i64::MIN);
    assert_eq!(Index::from(1e30).get(), i64::MAX);
}

#[test]
fn test_default_rounding_is_toward_zero() {
    assert_eq!(Rounding::default(), Rounding::TowardZero);
    assert_eq!(
        Index::from_float(-3.9, Rounding::default()),
        Index::from(-3.9)
    );
}

#[test]
fn test_constants() {
    assert_eq!(Index::FIRST, Index::new(0));
    assert_eq!(Index::LAST, Index::new(-1));
    assert!(Index::LAST.is_from_end());
    assert!(!Index::FIRST.is_from_end());
    assert_eq!(Index::default(), Index::FIRST);
}

#[test]
fn test_display() {
    assert_eq!(Index::new(-4).to_string(), "-4");
    assert_eq!(Index::new(12).to_string(), "12");
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_resolve_from_start() {
    assert_eq!(Index::new(0).resolve(3), Some(0));
    assert_eq!(Index::new(2).resolve(3), Some(2));
    assert_eq!(Index::new(3).resolve(3), None);
}

#[test]
fn test_resolve_from_end() {
    assert_eq!(Index::new(-1).resolve(3), Some(2));
    assert_eq!(Index::new(-3).resolve(3), Some(0));
    assert_eq!(Index::new(-4).resolve(3), None);
}

#[test]
fn test_resolve_empty() {
    init_test_logging();

    assert_eq!(Index::new(0).resolve(0), None);
    assert_eq!(Index::new(-1).resolve(0), None);
}

#[test]
fn test_resolve_extremes_do_not_overflow() {
    assert_eq!(
        Index::new(i64::MAX).resolve(usize::MAX),
        usize::try_from(i64::MAX).ok()
    );
    assert_eq!(Index::new(i64::MIN).resolve(3), None);
    assert_eq!(Index::new(i64::MAX).resolve(3), None);
    assert_eq!(Index::new(-1).resolve(usize::MAX), Some(usize::MAX - 1));
}
