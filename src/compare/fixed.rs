//! Comparison against a fixed absolute error.

use std::marker::PhantomData;

use super::{ApproxEqualityComparer, ComparableNumber};

/// Comparer that considers two numbers equal if their absolute difference is
/// strictly less than the tolerance.
///
/// This does not special-case zero or infinities; whatever subtraction
/// produces is compared directly. Any comparison involving NaN is `false`,
/// and so is any comparison involving an infinity, since the difference is
/// then infinite or NaN.
///
/// # Examples
///
/// ```
/// use contract_checks::{ApproxEqualityComparer, FixedErrorComparer};
///
/// let comparer = FixedErrorComparer::<f64>::new();
/// assert!(comparer.approximately_equals(0.1 + 0.2, 0.3, 1e-9));
/// assert!(!comparer.approximately_equals(1.0, 1.5, 0.5));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct FixedErrorComparer<T> {
    _marker: PhantomData<fn(T, T, T) -> bool>,
}

impl<T> FixedErrorComparer<T> {
    /// Constructs a fixed-error comparer.
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: ComparableNumber> ApproxEqualityComparer<T> for FixedErrorComparer<T> {
    fn approximately_equals(&self, x: T, y: T, tolerance: T) -> bool {
        x.abs_diff(y) < tolerance
    }
}
