//! ABA routing transit number check digits.

use super::{CheckDigitAlgorithm, parse_digits};

/// Number of digits in a routing number.
pub const ABA_LEN: usize = 9;

/// Weights repeating over each group of three digits.
const WEIGHTS: [u32; 3] = [3, 7, 1];

/// ABA routing transit number algorithm.
///
/// Digits are weighted `3, 7, 1` repeating from the left and the weighted
/// sum must be a multiple of 10. The check digit is the ninth digit and
/// carries weight 1 in the same sum.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AbaRoutingNumber;

impl CheckDigitAlgorithm for AbaRoutingNumber {
    fn name(&self) -> &'static str {
        "ABA Routing Number"
    }

    fn validate(&self, value: &str) -> bool {
        if value.len() != ABA_LEN {
            return false;
        }
        let Some(digits) = parse_digits(value) else {
            return false;
        };
        let sum: u32 = std::iter::zip(&digits, WEIGHTS.iter().cycle())
            .map(|(&d, &w)| u32::from(d) * w)
            .sum();
        sum % 10 == 0
    }
}
