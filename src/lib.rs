//! shiftcrack: Caesar cipher and automated frequency-analysis cryptanalysis.
//!
//! Implements the classical shift (Caesar) substitution cipher over the
//! 26-letter Latin alphabet, and a cryptanalysis routine that recovers
//! plausible plaintexts from ciphertext without knowing the shift key by
//! ranking every possible decryption with a chi-square letter-frequency
//! goodness-of-fit test.
//!
//! # Architecture
//!
//! ```text
//! ShiftCipher        (leaf — case-preserving rotation, non-letters pass through)
//!     ↑ applied once per candidate shift
//! FrequencyAnalyzer  (brute force over 26 shifts + chi-square scoring + ranking)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with a known key:
//!
//! ```
//! use shiftcrack::ShiftCipher;
//!
//! let cipher = ShiftCipher::with_shift(13);
//! let ciphertext = cipher.encrypt("Meet me at the usual place.");
//! assert_eq!(cipher.decrypt(&ciphertext), "Meet me at the usual place.");
//! ```
//!
//! Recover a plaintext without the key:
//!
//! ```
//! use shiftcrack::{FrequencyAnalyzer, ShiftCipher};
//!
//! let plaintext = "Letter frequencies betray a shift cipher: the most common \
//!                  letters of the ciphertext line up with e, t, and a once \
//!                  the right shift is undone.";
//! let ciphertext = ShiftCipher::with_shift(5).encrypt(plaintext);
//!
//! let best = FrequencyAnalyzer::new(&ciphertext).analyze(1);
//! assert_eq!(best[0], plaintext);
//! ```

#![deny(clippy::all)]

pub mod error;

mod analyzer;
mod frequency;
mod shift_cipher;

pub use analyzer::FrequencyAnalyzer;
pub use frequency::{ObservedDistribution, ReferenceDistribution, ENGLISH_LETTER_FREQUENCIES};
pub use shift_cipher::ShiftCipher;
