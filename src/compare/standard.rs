//! Shared comparers for each supported numeric type.
//!
//! # Example
//!
//! ```
//! use contract_checks::{ApproxEqualityComparer, compare::standard};
//!
//! assert!(standard::F64_RELATIVE_ERROR.approximately_equals(1e6, 1e6 + 1.0, 1e-6));
//! assert!(standard::F32_FIXED_ERROR.approximately_equals(0.1 + 0.2, 0.3, 1e-6));
//! ```

use super::{FixedErrorComparer, RelativeErrorComparer};

/// Fixed-error comparer for `f64`.
pub const F64_FIXED_ERROR: FixedErrorComparer<f64> = FixedErrorComparer::new();
/// Relative-error comparer for `f64`.
pub const F64_RELATIVE_ERROR: RelativeErrorComparer<f64> = RelativeErrorComparer::new();

/// Fixed-error comparer for `f32`.
pub const F32_FIXED_ERROR: FixedErrorComparer<f32> = FixedErrorComparer::new();
/// Relative-error comparer for `f32`.
pub const F32_RELATIVE_ERROR: RelativeErrorComparer<f32> = RelativeErrorComparer::new();

/// Fixed-error comparer for [`half::f16`].
#[cfg(feature = "f16")]
pub const F16_FIXED_ERROR: FixedErrorComparer<half::f16> = FixedErrorComparer::new();
/// Relative-error comparer for [`half::f16`].
#[cfg(feature = "f16")]
pub const F16_RELATIVE_ERROR: RelativeErrorComparer<half::f16> = RelativeErrorComparer::new();

/// Fixed-error comparer for [`rust_decimal::Decimal`].
#[cfg(feature = "decimal")]
pub const DECIMAL_FIXED_ERROR: FixedErrorComparer<rust_decimal::Decimal> =
    FixedErrorComparer::new();
/// Relative-error comparer for [`rust_decimal::Decimal`].
#[cfg(feature = "decimal")]
pub const DECIMAL_RELATIVE_ERROR: RelativeErrorComparer<rust_decimal::Decimal> =
    RelativeErrorComparer::new();
