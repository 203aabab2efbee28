//! Comparison against an error relative to the magnitude of the operands.

use std::marker::PhantomData;

use super::{ApproxEqualityComparer, ComparableNumber};

/// Comparer that scales the tolerance by the magnitude of the operands.
///
/// Given `x`, `y`, and `tolerance`:
///
/// 1. If `x == y`, they are equal. This covers exact matches, signed zeros,
///    and infinities of the same sign.
/// 2. If either is zero, or `|x| + |y|` is smaller than the smallest normal
///    value, relative error is meaningless, so they are equal if
///    `|x - y| < tolerance * min_normal`.
/// 3. Otherwise they are equal if `|x - y| / min(|x| + |y|, MAX) <
///    tolerance`, where `MAX` is the largest finite value.
///
/// NaN is never equal to anything, including itself. Numbers of opposite
/// sign with non-negligible magnitude are never equal, no matter how small
/// their difference.
///
/// See <https://floating-point-gui.de/errors/comparison/>.
///
/// # Examples
///
/// ```
/// use contract_checks::{ApproxEqualityComparer, RelativeErrorComparer};
///
/// let comparer = RelativeErrorComparer::<f64>::new();
/// assert!(comparer.approximately_equals(1_000_000.0, 1_000_001.0, 1e-6));
/// assert!(!comparer.approximately_equals(10_000.0, 10_001.0, 1e-6));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct RelativeErrorComparer<T> {
    _marker: PhantomData<fn(T, T, T) -> bool>,
}

impl<T> RelativeErrorComparer<T> {
    /// Constructs a relative-error comparer.
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: ComparableNumber> ApproxEqualityComparer<T> for RelativeErrorComparer<T> {
    fn approximately_equals(&self, x: T, y: T, tolerance: T) -> bool {
        if x == y {
            return true;
        }

        let zero = T::zero();
        let min_normal = T::min_normal();
        let diff = x.abs_diff(y);
        let magnitude = x.abs().saturating_add(y.abs());

        if x == zero || y == zero || magnitude < min_normal {
            return diff < tolerance.saturating_mul(min_normal);
        }

        let max = T::max_value();
        let magnitude = if magnitude < max { magnitude } else { max };
        diff.saturating_div(magnitude) < tolerance
    }
}
