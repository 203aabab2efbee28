//! Approximate equality comparison of floating-point and decimal numbers.
//!
//! [`FixedErrorComparer`] compares the absolute difference against the
//! tolerance. [`RelativeErrorComparer`] scales the tolerance by the magnitude
//! of the operands. Neither panics; NaN is never equal to anything.
//!
//! Shared comparers for each supported type live in [`standard`].

use std::cmp::Ordering;

pub mod fixed;
pub mod number;
pub mod relative;
pub mod standard;

pub use fixed::FixedErrorComparer;
pub use number::ComparableNumber;
pub use relative::RelativeErrorComparer;

/// Policy for comparing two numbers for approximate equality.
pub trait ApproxEqualityComparer<T: ComparableNumber> {
    /// Returns whether `x` and `y` are approximately equal within
    /// `tolerance`.
    fn approximately_equals(&self, x: T, y: T, tolerance: T) -> bool;

    /// Returns whether `x` is approximately zero.
    fn approximately_equals_zero(&self, x: T, tolerance: T) -> bool {
        self.approximately_equals(x, T::zero(), tolerance)
    }

    /// Returns whether `xs` and `ys` have the same length and every pair of
    /// corresponding elements is approximately equal.
    fn all_approximately_equal(&self, xs: &[T], ys: &[T], tolerance: T) -> bool {
        xs.len() == ys.len()
            && std::iter::zip(xs, ys).all(|(&x, &y)| self.approximately_equals(x, y, tolerance))
    }

    /// Returns [`Ordering::Equal`] if `x` and `y` are approximately equal and
    /// their exact ordering otherwise. Returns `None` if they are unequal and
    /// unordered, which happens only for NaN.
    fn approximate_cmp(&self, x: T, y: T, tolerance: T) -> Option<Ordering> {
        match self.approximately_equals(x, y, tolerance) {
            true => Some(Ordering::Equal),
            false => x.partial_cmp(&y),
        }
    }
}

impl<T: ComparableNumber, C: ApproxEqualityComparer<T> + ?Sized> ApproxEqualityComparer<T> for &C {
    fn approximately_equals(&self, x: T, y: T, tolerance: T) -> bool {
        C::approximately_equals(self, x, y, tolerance)
    }
}
