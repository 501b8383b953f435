//! Letter-frequency distributions over the 26-letter Latin alphabet.
//!
//! Provides the fixed English reference distribution used as the
//! expected side of the chi-square test, and the observed distribution
//! computed from each candidate plaintext. Both are percentage tables
//! indexed by letter position (a = 0 … z = 25).

use crate::error::ShiftCrackError;
use crate::shift_cipher::ALPHABET_LEN;

/// Number of letter categories in a distribution.
pub const NUM_LETTERS: usize = ALPHABET_LEN as usize;

/// Expected percentage frequency of each letter in general English text,
/// indexed a → z.
///
/// Empirical constants from Norvig's analysis of the Google Books corpus
/// (<https://norvig.com/mayzner.html>). The values are percentages and do
/// not sum to exactly 100.
pub const ENGLISH_LETTER_FREQUENCIES: [f64; NUM_LETTERS] = [
    8.04,  // a
    1.48,  // b
    3.34,  // c
    3.82,  // d
    12.49, // e
    2.40,  // f
    1.87,  // g
    5.05,  // h
    7.57,  // i
    0.16,  // j
    0.54,  // k
    4.07,  // l
    2.51,  // m
    7.23,  // n
    7.64,  // o
    2.14,  // p
    0.12,  // q
    6.28,  // r
    6.51,  // s
    9.28,  // t
    2.73,  // u
    1.05,  // v
    1.68,  // w
    0.23,  // x
    1.66,  // y
    0.09,  // z
];

/// Immutable expected letter-frequency table.
///
/// Validated at construction and shared read-only by all scoring
/// operations. Every entry must be finite and strictly positive because
/// the chi-square statistic divides by each expected value.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDistribution {
    frequencies: [f64; NUM_LETTERS],
    sum: f64,
}

impl ReferenceDistribution {
    /// Creates the standard English reference distribution.
    ///
    /// # Examples
    ///
    /// ```
    /// use shiftcrack::ReferenceDistribution;
    ///
    /// let english = ReferenceDistribution::english();
    /// assert!(english.sum() > 99.0 && english.sum() < 101.0);
    /// ```
    pub fn english() -> Self {
        // The constant table is known-valid; skip re-validation.
        let sum = ENGLISH_LETTER_FREQUENCIES.iter().sum();
        ReferenceDistribution {
            frequencies: ENGLISH_LETTER_FREQUENCIES,
            sum,
        }
    }

    /// Creates a reference distribution from caller-supplied percentages,
    /// indexed a → z.
    ///
    /// # Errors
    /// - [`ShiftCrackError::NonFiniteReferenceFrequency`] if any entry is
    ///   NaN or infinite.
    /// - [`ShiftCrackError::NonPositiveReferenceFrequency`] if any entry
    ///   is zero or negative.
    /// - [`ShiftCrackError::ReferenceSumNotPositive`] if the entries do
    ///   not sum to a positive value.
    ///
    /// # Examples
    ///
    /// ```
    /// use shiftcrack::ReferenceDistribution;
    ///
    /// let result = ReferenceDistribution::from_frequencies([0.0; 26]);
    /// assert!(result.is_err());
    /// ```
    pub fn from_frequencies(
        frequencies: [f64; NUM_LETTERS],
    ) -> Result<Self, ShiftCrackError> {
        for &freq in &frequencies {
            if !freq.is_finite() {
                return Err(ShiftCrackError::NonFiniteReferenceFrequency);
            }
            if freq <= 0.0 {
                return Err(ShiftCrackError::NonPositiveReferenceFrequency);
            }
        }
        let sum: f64 = frequencies.iter().sum();
        if sum <= 0.0 {
            return Err(ShiftCrackError::ReferenceSumNotPositive);
        }
        Ok(ReferenceDistribution { frequencies, sum })
    }

    /// Returns the expected percentages, indexed a → z.
    pub fn frequencies(&self) -> &[f64; NUM_LETTERS] {
        &self.frequencies
    }

    /// Returns the sum of all expected percentages.
    pub fn sum(&self) -> f64 {
        self.sum
    }
}

/// Letter-frequency distribution observed in one candidate text.
///
/// Percentages of the alphabetic character total, case-folded to
/// lowercase. Letters that never occur appear with value 0.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedDistribution {
    percentages: [f64; NUM_LETTERS],
    sum: f64,
}

impl ObservedDistribution {
    /// Computes the observed distribution of `text`.
    ///
    /// Alphabetic characters are counted case-insensitively; everything
    /// else is ignored and does not contribute to the total. Returns
    /// `None` when `text` contains no ASCII letters at all, since
    /// percentages of an empty total are undefined.
    pub fn from_text(text: &str) -> Option<Self> {
        let mut counts = [0u32; NUM_LETTERS];
        let mut total = 0u32;
        for ch in text.chars() {
            if ch.is_ascii_alphabetic() {
                counts[(ch.to_ascii_lowercase() as u8 - b'a') as usize] += 1;
                total += 1;
            }
        }
        if total == 0 {
            return None;
        }
        let mut percentages = [0.0f64; NUM_LETTERS];
        for (pct, &count) in percentages.iter_mut().zip(counts.iter()) {
            *pct = count as f64 / total as f64 * 100.0;
        }
        let sum = percentages.iter().sum();
        Some(ObservedDistribution { percentages, sum })
    }

    /// Returns the observed percentages, indexed a → z.
    pub fn percentages(&self) -> &[f64; NUM_LETTERS] {
        &self.percentages
    }

    /// Returns the sum of all observed percentages (100 up to rounding).
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Rescales the distribution so its values sum to `target_sum`,
    /// making it magnitude-comparable with a reference distribution.
    pub fn rescaled_to(&self, target_sum: f64) -> [f64; NUM_LETTERS] {
        let scale = target_sum / self.sum;
        let mut rescaled = self.percentages;
        for value in rescaled.iter_mut() {
            *value *= scale;
        }
        rescaled
    }
}
