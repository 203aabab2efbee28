//! ISBN-10 check digits.

use super::{CheckDigitAlgorithm, digit_value};

/// Number of characters in an ISBN-10, including the check digit.
pub const ISBN10_LEN: usize = 10;

/// ISBN-10 algorithm.
///
/// The digit at index `i` is weighted `10 - i` and the weighted sum,
/// including the check digit, must be a multiple of 11. A check digit of 10
/// is written as an uppercase `X`; lowercase `x` is rejected. Hyphens and
/// spaces are not accepted.
///
/// # Examples
///
/// ```
/// use contract_checks::{CheckDigitAlgorithm, Isbn10};
///
/// assert!(Isbn10.validate("080442957X"));
/// assert!(!Isbn10.validate("080442957x"));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Isbn10;

impl CheckDigitAlgorithm for Isbn10 {
    fn name(&self) -> &'static str {
        "ISBN-10"
    }

    fn validate(&self, value: &str) -> bool {
        let Ok(bytes) = <&[u8; ISBN10_LEN]>::try_from(value.as_bytes()) else {
            return false;
        };
        let (payload, check) = (&bytes[..ISBN10_LEN - 1], bytes[ISBN10_LEN - 1]);

        // Running sums weight each digit by the number of times it is added.
        let mut total = 0_u32;
        let mut sum = 0_u32;
        for &b in payload {
            let Some(d) = digit_value(b) else {
                return false;
            };
            total += u32::from(d);
            sum += total;
        }
        sum += total;

        match (11 - sum % 11) % 11 {
            10 => check == b'X',
            expected => digit_value(check) == Some(expected as u8),
        }
    }
}
