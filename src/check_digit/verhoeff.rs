//! Verhoeff check digits.

use super::{CheckDigitAlgorithm, parse_digits};

/// Multiplication table of the dihedral group D5.
const MULTIPLICATION: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Position-dependent permutations; row `i` is applied to the digit `i`
/// places from the right (mod 8).
const PERMUTATION: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 7, 6, 8, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Verhoeff algorithm.
///
/// Detects every single-digit error and every transposition of adjacent
/// digits. The check digit is the rightmost digit and takes part in the
/// checksum like any other digit.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Verhoeff;

impl CheckDigitAlgorithm for Verhoeff {
    fn name(&self) -> &'static str {
        "Verhoeff"
    }

    fn validate(&self, value: &str) -> bool {
        match parse_digits(value) {
            Some(digits) if digits.len() >= 2 => checksum(&digits) == 0,
            _ => false,
        }
    }
}

fn checksum(digits: &[u8]) -> u8 {
    digits
        .iter()
        .rev()
        .enumerate()
        .fold(0, |c, (i, &d)| {
            MULTIPLICATION[c as usize][PERMUTATION[i % 8][d as usize] as usize]
        })
}
