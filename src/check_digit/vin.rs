//! Vehicle identification number check digits.

use super::{CheckDigitAlgorithm, digit_value};

/// Number of characters in a VIN.
pub const VIN_LEN: usize = 17;

/// Index of the check digit within a VIN.
const CHECK_DIGIT_INDEX: usize = 8;

/// Weight of each position. The check digit position has weight 0.
const WEIGHTS: [u32; VIN_LEN] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// Vehicle identification number (VIN) algorithm, as used in North America.
///
/// Letters are transliterated to digits, each position is multiplied by a
/// fixed weight, and the check digit at index 8 is the weighted sum mod 11,
/// with 10 written as `X`. The letters `I`, `O`, and `Q` never appear in a
/// valid VIN. Lowercase letters are rejected.
///
/// # Examples
///
/// ```
/// use contract_checks::{CheckDigitAlgorithm, VehicleIdentificationNumber};
///
/// assert!(VehicleIdentificationNumber.validate("1M8GDM9AXKP042788"));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct VehicleIdentificationNumber;

impl CheckDigitAlgorithm for VehicleIdentificationNumber {
    fn name(&self) -> &'static str {
        "VIN"
    }

    fn validate(&self, value: &str) -> bool {
        let Ok(bytes) = <&[u8; VIN_LEN]>::try_from(value.as_bytes()) else {
            return false;
        };

        let mut sum = 0;
        for (i, (&b, &weight)) in std::iter::zip(bytes, &WEIGHTS).enumerate() {
            if i == CHECK_DIGIT_INDEX {
                continue;
            }
            let Some(v) = transliterate(b) else {
                return false;
            };
            sum += u32::from(v) * weight;
        }

        let check = bytes[CHECK_DIGIT_INDEX];
        match sum % 11 {
            10 => check == b'X',
            expected => digit_value(check) == Some(expected as u8),
        }
    }
}

/// Returns the numeric value of a VIN character, or `None` if the character
/// cannot appear in a VIN.
fn transliterate(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => digit_value(b),
        b'A'..=b'H' => Some(b - b'A' + 1),
        b'J'..=b'N' => Some(b - b'J' + 1),
        b'P' => Some(7),
        b'R' => Some(9),
        b'S'..=b'Z' => Some(b - b'S' + 2),
        // I, O, Q, lowercase, and everything else
        _ => None,
    }
}
