//! Arithmetic needed to compare numbers approximately.

use std::fmt;

/// Numeric type that can be compared by [`FixedErrorComparer`] and
/// [`RelativeErrorComparer`].
///
/// Binary floating-point types use plain IEEE-754 arithmetic, where overflow
/// produces an infinity. Types without infinities saturate at
/// [`ComparableNumber::max_value()`] instead.
///
/// [`FixedErrorComparer`]: crate::FixedErrorComparer
/// [`RelativeErrorComparer`]: crate::RelativeErrorComparer
pub trait ComparableNumber: Copy + PartialOrd + fmt::Debug {
    /// Returns zero.
    fn zero() -> Self;
    /// Returns the smallest positive normal value.
    ///
    /// For binary floating-point types this is `2^(mantissa bits)` times the
    /// smallest positive subnormal value.
    fn min_normal() -> Self;
    /// Returns the largest finite value.
    fn max_value() -> Self;

    /// Returns the absolute value of `self`.
    fn abs(self) -> Self;
    /// Returns `|self - other|`.
    fn abs_diff(self, other: Self) -> Self;
    /// Returns `self + other`.
    fn saturating_add(self, other: Self) -> Self;
    /// Returns `self * other`.
    fn saturating_mul(self, other: Self) -> Self;
    /// Returns `self / other`. `other` is never zero.
    fn saturating_div(self, other: Self) -> Self;
}

macro_rules! impl_comparable_float {
    ($t:ty) => {
        impl ComparableNumber for $t {
            fn zero() -> Self {
                0.0
            }
            fn min_normal() -> Self {
                <$t>::MIN_POSITIVE
            }
            fn max_value() -> Self {
                <$t>::MAX
            }

            fn abs(self) -> Self {
                <$t>::abs(self)
            }
            fn abs_diff(self, other: Self) -> Self {
                <$t>::abs(self - other)
            }
            fn saturating_add(self, other: Self) -> Self {
                self + other
            }
            fn saturating_mul(self, other: Self) -> Self {
                self * other
            }
            fn saturating_div(self, other: Self) -> Self {
                self / other
            }
        }
    };
}

impl_comparable_float!(f32);
impl_comparable_float!(f64);

#[cfg(feature = "f16")]
impl ComparableNumber for half::f16 {
    fn zero() -> Self {
        half::f16::ZERO
    }
    fn min_normal() -> Self {
        half::f16::MIN_POSITIVE
    }
    fn max_value() -> Self {
        half::f16::MAX
    }

    fn abs(self) -> Self {
        // Clear the sign bit; `half::f16` has no inherent `abs`.
        half::f16::from_bits(self.to_bits() & 0x7fff)
    }
    fn abs_diff(self, other: Self) -> Self {
        ComparableNumber::abs(self - other)
    }
    fn saturating_add(self, other: Self) -> Self {
        self + other
    }
    fn saturating_mul(self, other: Self) -> Self {
        self * other
    }
    fn saturating_div(self, other: Self) -> Self {
        self / other
    }
}

#[cfg(feature = "decimal")]
impl ComparableNumber for rust_decimal::Decimal {
    fn zero() -> Self {
        rust_decimal::Decimal::ZERO
    }
    fn min_normal() -> Self {
        // Decimal has no subnormals; this is the smallest positive value.
        rust_decimal::Decimal::new(1, 28)
    }
    fn max_value() -> Self {
        rust_decimal::Decimal::MAX
    }

    fn abs(self) -> Self {
        rust_decimal::Decimal::abs(&self)
    }
    fn abs_diff(self, other: Self) -> Self {
        self.checked_sub(other)
            .map_or(rust_decimal::Decimal::MAX, |diff| diff.abs())
    }
    fn saturating_add(self, other: Self) -> Self {
        rust_decimal::Decimal::saturating_add(self, other)
    }
    fn saturating_mul(self, other: Self) -> Self {
        rust_decimal::Decimal::saturating_mul(self, other)
    }
    fn saturating_div(self, other: Self) -> Self {
        self.checked_div(other).unwrap_or(rust_decimal::Decimal::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_normal_is_smallest_normal() {
        let smallest_subnormal_f64 = f64::from_bits(1);
        assert_eq!(f64::min_normal(), 2.0_f64.powi(52) * smallest_subnormal_f64);
        assert!(f64::min_normal().is_normal());
        assert!(!f64::min_normal().next_down().is_normal());

        let smallest_subnormal_f32 = f32::from_bits(1);
        assert_eq!(f32::min_normal(), 2.0_f32.powi(23) * smallest_subnormal_f32);
        assert!(f32::min_normal().is_normal());
        assert!(!f32::min_normal().next_down().is_normal());
    }

    #[cfg(feature = "f16")]
    #[test]
    fn test_f16_min_normal() {
        use half::f16;

        let smallest_subnormal = f16::from_bits(1);
        assert_eq!(
            f16::min_normal(),
            f16::from_f32(2.0_f32.powi(10) * smallest_subnormal.to_f32()),
        );
        assert!(<f16 as ComparableNumber>::min_normal().is_normal());
        assert!(!f16::from_bits(f16::MIN_POSITIVE.to_bits() - 1).is_normal());
    }

    #[cfg(feature = "f16")]
    #[test]
    fn test_f16_abs() {
        use half::f16;

        let f = f16::from_f32;
        assert_eq!(ComparableNumber::abs(f(-1.5)), f(1.5));
        assert_eq!(ComparableNumber::abs(f(1.5)), f(1.5));
        assert_eq!(ComparableNumber::abs(f16::NEG_INFINITY), f16::INFINITY);
        assert!(ComparableNumber::abs(f16::NEG_ZERO).is_sign_positive());
        assert!(ComparableNumber::abs(f16::NAN).is_nan());
        assert_eq!(ComparableNumber::abs_diff(f(1.0), f(3.0)), f(2.0));
        assert_eq!(ComparableNumber::abs_diff(f(3.0), f(1.0)), f(2.0));
        assert_eq!(ComparableNumber::abs_diff(f16::MAX, -f16::MAX), f16::INFINITY);
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn test_decimal_saturates() {
        use rust_decimal::Decimal;

        assert_eq!(ComparableNumber::abs_diff(Decimal::MAX, Decimal::MIN), Decimal::MAX);
        assert_eq!(
            ComparableNumber::saturating_add(Decimal::MAX, Decimal::MAX),
            Decimal::MAX,
        );
        assert_eq!(
            ComparableNumber::abs_diff(Decimal::new(-5, 1), Decimal::new(5, 1)),
            Decimal::ONE,
        );
        assert!(<Decimal as ComparableNumber>::min_normal() > Decimal::ZERO);
    }

    #[test]
    fn test_signed_zero() {
        assert_eq!(f64::zero(), -0.0);
        assert_eq!(ComparableNumber::abs_diff(-0.0_f64, 0.0), 0.0);
    }
}
