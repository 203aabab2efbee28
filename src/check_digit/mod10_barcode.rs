//! Mod 10 check digits used by GS1 barcodes.

use super::{CheckDigitAlgorithm, parse_digits};

/// Mod 10 barcode algorithm, shared by UPC, EAN, GTIN, ISBN-13, and SSCC
/// numbers.
///
/// Counting from the right and excluding the check digit, digits in odd
/// positions are weighted 3 and digits in even positions are weighted 1.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Mod10Barcode;

impl CheckDigitAlgorithm for Mod10Barcode {
    fn name(&self) -> &'static str {
        "Mod 10 Barcode"
    }

    fn validate(&self, value: &str) -> bool {
        let Some(digits) = parse_digits(value) else {
            return false;
        };
        match digits.split_last() {
            Some((&check, payload)) if !payload.is_empty() => check_digit(payload) == check,
            _ => false,
        }
    }
}

fn check_digit(payload: &[u8]) -> u8 {
    let sum = payload
        .iter()
        .rev()
        .enumerate()
        .fold(0_u32, |sum, (i, &d)| {
            let weight = if i % 2 == 0 { 3 } else { 1 };
            (sum + u32::from(d) * weight) % 10
        });
    ((10 - sum) % 10) as u8
}
