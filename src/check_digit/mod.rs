//! Check-digit algorithms for numeric identifiers.
//!
//! Every algorithm implements [`CheckDigitAlgorithm`]. Validation is total:
//! empty input, the wrong length, or a character outside the format's
//! alphabet all make [`CheckDigitAlgorithm::validate()`] return `false`.
//!
//! Algorithms in the Luhn family also implement [`CheckDigitCalculator`],
//! which computes the check digit for a payload and reports malformed input
//! as a [`CheckDigitError`].
//!
//! Shared instances of every algorithm live in [`standard`].

use std::fmt;

use smallvec::SmallVec;

use crate::CheckDigitError;

pub mod aba;
pub mod isbn10;
pub mod luhn;
pub mod mod10_barcode;
pub mod npi;
pub mod standard;
pub mod verhoeff;
pub mod vin;

pub use aba::AbaRoutingNumber;
pub use isbn10::Isbn10;
pub use luhn::Luhn;
pub use mod10_barcode::Mod10Barcode;
pub use npi::Npi;
pub use verhoeff::Verhoeff;
pub use vin::VehicleIdentificationNumber;

/// Numeric values of the digits of an identifier, most significant first.
pub(crate) type Digits = SmallVec<[u8; 24]>;

/// Algorithm that validates the check digit embedded in an identifier.
pub trait CheckDigitAlgorithm: Send + Sync + fmt::Debug {
    /// Human-readable name of the algorithm, such as `"Luhn"` or `"VIN"`.
    fn name(&self) -> &'static str;

    /// Returns whether `value` is well-formed and its check digit matches
    /// the rest of the value.
    fn validate(&self, value: &str) -> bool;
}

/// Algorithm that can also compute a check digit.
pub trait CheckDigitCalculator: CheckDigitAlgorithm {
    /// Computes the check digit for `value`.
    ///
    /// If `includes_check_digit` is `true`, the last character of `value` is
    /// an existing check digit and is ignored.
    ///
    /// Returns `'0'` if there is nothing to compute a check digit from.
    /// Returns an error if any character that takes part in the computation
    /// is not an ASCII digit.
    fn compute(&self, value: &str, includes_check_digit: bool) -> Result<char, CheckDigitError>;
}

/// Returns the numeric value of an ASCII digit.
pub(crate) fn digit_value(b: u8) -> Option<u8> {
    b.is_ascii_digit().then(|| b - b'0')
}

/// Returns the ASCII digit for a value in `0..=9`.
pub(crate) fn digit_char(d: u8) -> char {
    char::from(b'0' + d)
}

/// Parses `value` into digits, or returns `None` if it contains anything
/// other than ASCII digits.
pub(crate) fn parse_digits(value: &str) -> Option<Digits> {
    value.bytes().map(digit_value).collect()
}

/// Parses `value` into digits, reporting the first non-digit character.
pub(crate) fn parse_payload(value: &str, parameter: &'static str) -> Result<Digits, CheckDigitError> {
    value
        .char_indices()
        .map(|(index, character)| {
            u8::try_from(character)
                .ok()
                .and_then(digit_value)
                .ok_or(CheckDigitError::NonDigit {
                    parameter,
                    character,
                    index,
                })
        })
        .collect()
}

/// Returns `value` without its last character if `includes_check_digit` is
/// set.
pub(crate) fn strip_check_digit(value: &str, includes_check_digit: bool) -> &str {
    if includes_check_digit {
        value.char_indices().next_back().map_or("", |(i, _)| &value[..i])
    } else {
        value
    }
}
