//! Building blocks for precondition and postcondition checks.
//!
//! [`check_digit`] validates numeric identifiers whose last (or embedded)
//! digit is a checksum of the others: [`Luhn`], [`Verhoeff`], [`Isbn10`],
//! [`AbaRoutingNumber`], [`Mod10Barcode`], [`Npi`], and
//! [`VehicleIdentificationNumber`]. Every algorithm implements
//! [`CheckDigitAlgorithm`]; validation never fails, it only returns `false`.
//!
//! [`compare`] tests numbers for approximate equality using either a fixed
//! absolute error ([`FixedErrorComparer`]) or an error relative to the
//! magnitude of the operands ([`RelativeErrorComparer`]).
//!
//! Both modules have a `standard` submodule with shared instances.
//!
//! # Example
//!
//! ```
//! # use contract_checks::*;
//! assert!(Luhn.validate("4111111111111111"));
//! assert!(!Isbn10.validate("030640615x"));
//!
//! const APPROX: RelativeErrorComparer<f64> = RelativeErrorComparer::new();
//!
//! assert_ne!(0.1 + 0.2, 0.3_f64);
//! assert!(APPROX.approximately_equals(0.1 + 0.2, 0.3, 1e-12));
//! ```
//!
//! # Features
//!
//! - `rustc-hash` (default) uses a faster hashing algorithm for
//!   [`check_digit::standard::by_name()`].
//! - `f16` (default) adds comparers for [`half::f16`].
//! - `decimal` (default) adds comparers for [`rust_decimal::Decimal`].

pub mod check_digit;
pub mod compare;
pub mod error;

pub use check_digit::{
    AbaRoutingNumber, CheckDigitAlgorithm, CheckDigitCalculator, Isbn10, Luhn, Mod10Barcode, Npi,
    VehicleIdentificationNumber, Verhoeff,
};
pub use compare::{
    ApproxEqualityComparer, ComparableNumber, FixedErrorComparer, RelativeErrorComparer,
};
pub use error::CheckDigitError;
