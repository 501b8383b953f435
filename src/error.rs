//! Error types for the shiftcrack library.

use std::fmt;

/// Errors produced by the shiftcrack library.
///
/// All variants describe reference-table validation failures. A malformed
/// expected-frequency table would produce silently wrong chi-square scores,
/// so construction fails fast instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftCrackError {
    /// A reference frequency is NaN or infinite.
    NonFiniteReferenceFrequency,
    /// A reference frequency is zero or negative.
    NonPositiveReferenceFrequency,
    /// The reference frequencies do not sum to a positive value.
    ReferenceSumNotPositive,
}

impl fmt::Display for ShiftCrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftCrackError::NonFiniteReferenceFrequency => {
                write!(f, "Reference frequency must be a finite number")
            }
            ShiftCrackError::NonPositiveReferenceFrequency => {
                write!(f, "Reference frequency must be greater than zero")
            }
            ShiftCrackError::ReferenceSumNotPositive => {
                write!(f, "Reference frequencies must sum to a positive value")
            }
        }
    }
}

impl std::error::Error for ShiftCrackError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_non_finite() {
        let err = ShiftCrackError::NonFiniteReferenceFrequency;
        assert_eq!(
            format!("{}", err),
            "Reference frequency must be a finite number"
        );
    }

    #[test]
    fn test_display_non_positive() {
        let err = ShiftCrackError::NonPositiveReferenceFrequency;
        assert_eq!(
            format!("{}", err),
            "Reference frequency must be greater than zero"
        );
    }

    #[test]
    fn test_display_sum_not_positive() {
        let err = ShiftCrackError::ReferenceSumNotPositive;
        assert_eq!(
            format!("{}", err),
            "Reference frequencies must sum to a positive value"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            ShiftCrackError::ReferenceSumNotPositive,
            ShiftCrackError::ReferenceSumNotPositive
        );
        assert_ne!(
            ShiftCrackError::NonFiniteReferenceFrequency,
            ShiftCrackError::NonPositiveReferenceFrequency
        );
    }

    #[test]
    fn test_error_clone() {
        let err = ShiftCrackError::NonPositiveReferenceFrequency;
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
