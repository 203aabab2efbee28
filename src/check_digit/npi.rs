//! National Provider Identifier check digits.

use super::{
    CheckDigitAlgorithm, CheckDigitCalculator, digit_char, luhn, parse_digits, parse_payload,
    strip_check_digit,
};
use crate::CheckDigitError;

/// Number of characters in an NPI, including the check digit.
pub const NPI_LEN: usize = 10;

/// Luhn sum contributed by the implicit `80840` prefix of every NPI.
const PREFIX_SUM: u32 = 24;

/// National Provider Identifier (NPI) algorithm.
///
/// An NPI is ten digits validated with the Luhn algorithm as if it were
/// prefixed with the card issuer identifier `80840`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Npi;

impl CheckDigitAlgorithm for Npi {
    fn name(&self) -> &'static str {
        "NPI"
    }

    fn validate(&self, value: &str) -> bool {
        if value.len() != NPI_LEN {
            return false;
        }
        let Some(digits) = parse_digits(value) else {
            return false;
        };
        let (check, payload) = (digits[NPI_LEN - 1], &digits[..NPI_LEN - 1]);
        luhn::check_digit(payload, PREFIX_SUM) == check
    }
}

impl CheckDigitCalculator for Npi {
    fn compute(&self, value: &str, includes_check_digit: bool) -> Result<char, CheckDigitError> {
        let payload = strip_check_digit(value, includes_check_digit);
        // Only a full nine-digit payload forms an NPI.
        if payload.len() != NPI_LEN - 1 {
            return Ok('0');
        }
        let digits = parse_payload(payload, "value").inspect_err(|err| {
            tracing::trace!(algorithm = "NPI", %err, "cannot compute check digit");
        })?;
        Ok(digit_char(luhn::check_digit(&digits, PREFIX_SUM)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Luhn;

    #[test]
    fn test_prefix_sum() {
        let prefixed = [8, 0, 8, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(luhn::weighted_sum(&prefixed, 0), PREFIX_SUM % 10);
    }

    #[test]
    fn test_valid_numbers() {
        for value in ["1234567893", "1245319599", "1003000126"] {
            assert!(Npi.validate(value), "{value}");
            assert!(Luhn.validate(&format!("80840{value}")), "{value}");
        }
    }

    #[test]
    fn test_invalid_numbers() {
        for value in ["", "1234567890", "123456789", "12345678930", "1234567893 ", "123456789X"] {
            assert!(!Npi.validate(value), "{value}");
        }
    }

    #[test]
    fn test_out_of_alphabet_characters() {
        for i in 0..NPI_LEN {
            let mut s = "1234567893".to_string();
            s.replace_range(i..i + 1, "B");
            assert!(!Npi.validate(&s), "{s}");
        }
    }

    #[test]
    fn test_compute_wrong_length() {
        assert_eq!(Npi.compute("12345", false), Ok('0'));
        assert_eq!(Npi.compute("1234567890", false), Ok('0'));
        assert_eq!(Npi.compute("12345-", false), Ok('0'));
        assert_eq!(Npi.compute("7", true), Ok('0'));
    }

    #[test]
    fn test_compute() {
        assert_eq!(Npi.compute("123456789", false), Ok('3'));
        assert_eq!(Npi.compute("1234567890", true), Ok('3'));
        assert_eq!(Npi.compute("", false), Ok('0'));
        assert_eq!(
            Npi.compute("1234-6789", false),
            Err(CheckDigitError::NonDigit {
                parameter: "value",
                character: '-',
                index: 4,
            }),
        );
    }
}
