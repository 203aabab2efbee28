//! Luhn (mod 10) check digits, as used for payment card numbers.

use super::{
    CheckDigitAlgorithm, CheckDigitCalculator, digit_char, parse_digits, parse_payload,
    strip_check_digit,
};
use crate::CheckDigitError;

/// Luhn algorithm.
///
/// The rightmost digit is the check digit. Moving left from it, every second
/// digit is doubled (subtracting 9 if the result exceeds 9) and all digits are
/// summed; the check digit brings the sum to a multiple of 10.
///
/// Detects every single-digit error and most adjacent transpositions (but not
/// `09` ↔ `90`).
///
/// # Examples
///
/// ```
/// use contract_checks::{CheckDigitAlgorithm, CheckDigitCalculator, Luhn};
///
/// assert!(Luhn.validate("79927398713"));
/// assert!(!Luhn.validate("79927398710"));
/// assert_eq!(Luhn.compute("7992739871", false), Ok('3'));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Luhn;

impl CheckDigitAlgorithm for Luhn {
    fn name(&self) -> &'static str {
        "Luhn"
    }

    fn validate(&self, value: &str) -> bool {
        let Some(digits) = parse_digits(value) else {
            return false;
        };
        match digits.split_last() {
            Some((&check, payload)) if !payload.is_empty() => check_digit(payload, 0) == check,
            _ => false,
        }
    }
}

impl CheckDigitCalculator for Luhn {
    fn compute(&self, value: &str, includes_check_digit: bool) -> Result<char, CheckDigitError> {
        let payload = strip_check_digit(value, includes_check_digit);
        if payload.is_empty() {
            return Ok('0');
        }
        let digits = parse_payload(payload, "value").inspect_err(|err| {
            tracing::trace!(algorithm = "Luhn", %err, "cannot compute check digit");
        })?;
        Ok(digit_char(check_digit(&digits, 0)))
    }
}

/// Adds the Luhn-weighted `payload` digits to `initial`, modulo 10.
///
/// `payload` excludes the check digit, so its last digit is the first one
/// doubled.
pub(crate) fn weighted_sum(payload: &[u8], initial: u32) -> u32 {
    payload
        .iter()
        .rev()
        .enumerate()
        .fold(initial % 10, |sum, (i, &d)| {
            let d = u32::from(d);
            let term = match i % 2 {
                0 if d > 4 => d * 2 - 9,
                0 => d * 2,
                _ => d,
            };
            (sum + term) % 10
        })
}

/// Returns the check digit for `payload`, starting from a running total of
/// `initial`.
pub(crate) fn check_digit(payload: &[u8], initial: u32) -> u8 {
    ((10 - weighted_sum(payload, initial)) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &[&str] = &[
        "4111111111111111",
        "79927398713",
        "4012888888881881",
        "378282246310005",
        "6011111111111117",
        "5555555555554444",
        "00",
        "18",
    ];

    #[test]
    fn test_valid_numbers() {
        for value in VALID {
            assert!(Luhn.validate(value), "{value}");
        }
    }

    #[test]
    fn test_invalid_numbers() {
        for value in ["", "0", "4", "4111111111111112", "79927398710", "19"] {
            assert!(!Luhn.validate(value), "{value}");
        }
    }

    #[test]
    fn test_out_of_alphabet_characters() {
        for value in VALID {
            for i in 0..value.len() {
                for replacement in ["a", "-", " ", "٣"] {
                    let mut s = value.to_string();
                    s.replace_range(i..i + 1, replacement);
                    assert!(!Luhn.validate(&s), "{s}");
                }
            }
        }
    }

    #[test]
    fn test_detects_every_single_digit_error() {
        for value in VALID {
            for i in 0..value.len() {
                for d in b'0'..=b'9' {
                    let mut bytes = value.as_bytes().to_vec();
                    if bytes[i] == d {
                        continue;
                    }
                    bytes[i] = d;
                    let s = String::from_utf8(bytes).unwrap();
                    assert!(!Luhn.validate(&s), "{s}");
                }
            }
        }
    }

    #[test]
    fn test_misses_09_transposition() {
        assert!(Luhn.validate("0901"));
        assert_eq!(Luhn.compute("090", false), Ok('1'));
        assert_eq!(Luhn.compute("900", false), Ok('1'));
    }

    #[test]
    fn test_compute() {
        assert_eq!(Luhn.compute("7992739871", false), Ok('3'));
        assert_eq!(Luhn.compute("79927398713", true), Ok('3'));
        assert_eq!(Luhn.compute("79927398719", true), Ok('3'));
        assert_eq!(Luhn.compute("411111111111111", false), Ok('1'));
        assert_eq!(Luhn.compute("0", false), Ok('0'));
    }

    #[test]
    fn test_compute_too_short() {
        assert_eq!(Luhn.compute("", false), Ok('0'));
        assert_eq!(Luhn.compute("", true), Ok('0'));
        assert_eq!(Luhn.compute("7", true), Ok('0'));
    }

    #[test]
    fn test_compute_rejects_non_digits() {
        assert_eq!(
            Luhn.compute("79a27398713", true),
            Err(CheckDigitError::NonDigit {
                parameter: "value",
                character: 'a',
                index: 2,
            }),
        );
        // The ignored check digit is not scanned.
        assert_eq!(Luhn.compute("7992739871X", true), Ok('3'));
        assert!(Luhn.compute("7992739871X", false).is_err());
    }

    #[test]
    fn test_long_input() {
        let nines = "9".repeat(1 << 20);
        assert_eq!(weighted_sum(&vec![9; 1 << 20], 0), 4);
        assert_eq!(Luhn.compute(&nines, false), Ok('6'));
        assert!(Luhn.validate(&format!("{nines}6")));
        assert!(!Luhn.validate(&format!("{nines}0")));
    }

    #[proptest_macro::property_test]
    fn proptest_compute_then_validate(payload: Vec<u8>) {
        let payload: String = payload.iter().map(|&b| digit_char(b % 10)).collect();
        if let Ok(check) = Luhn.compute(&payload, false) {
            let full = format!("{payload}{check}");
            assert_eq!(Luhn.validate(&full), !payload.is_empty());
        }
    }
}
