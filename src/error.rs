//! Errors raised when computing a check digit.

use thiserror::Error;

/// Error returned by [`CheckDigitCalculator::compute()`] when the input
/// cannot produce a check digit.
///
/// Validation never produces this error; malformed input simply fails to
/// validate.
///
/// [`CheckDigitCalculator::compute()`]: crate::CheckDigitCalculator::compute
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckDigitError {
    /// A character outside `'0'..='9'` was found where a digit is required.
    #[error("`{parameter}` contains the non-digit character {character:?} at index {index}")]
    NonDigit {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The character that was rejected.
        character: char,
        /// Byte index of the character within the parameter.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CheckDigitError::NonDigit {
            parameter: "value",
            character: 'a',
            index: 3,
        };
        assert_eq!(
            err.to_string(),
            "`value` contains the non-digit character 'a' at index 3",
        );
    }
}
