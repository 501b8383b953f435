//! ShiftCipher: case-preserving Caesar rotation over the Latin alphabet.
//!
//! The atomic transform of the crate. Each letter is rotated within its own
//! case's 26-letter alphabet; every other character passes through unchanged.
//! `encrypt` and `decrypt` with the same shift are exact inverses.

/// Number of letters in the Latin alphabet; the wraparound modulus.
pub(crate) const ALPHABET_LEN: i32 = 26;

/// Default shift amount.
const DEFAULT_SHIFT: i32 = 11;

/// Case-preserving Caesar shift cipher.
///
/// The shift amount is taken modulo 26 at transform time, so any `i32` is a
/// valid key; shifts that differ by a multiple of 26 are equivalent.
///
/// # Examples
///
/// ```
/// use shiftcrack::ShiftCipher;
///
/// let cipher = ShiftCipher::with_shift(3);
/// let ciphertext = cipher.encrypt("Attack at dawn!");
/// assert_eq!(ciphertext, "Dwwdfn dw gdzq!");
/// assert_eq!(cipher.decrypt(&ciphertext), "Attack at dawn!");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftCipher {
    shift: i32,
}

impl Default for ShiftCipher {
    fn default() -> Self {
        Self::new()
    }
}

impl ShiftCipher {
    /// Creates a new ShiftCipher with the default shift of 11.
    ///
    /// # Examples
    ///
    /// ```
    /// use shiftcrack::ShiftCipher;
    ///
    /// let cipher = ShiftCipher::new();
    /// assert_eq!(cipher.shift(), 11);
    /// ```
    pub fn new() -> Self {
        Self::with_shift(DEFAULT_SHIFT)
    }

    /// Creates a new ShiftCipher with a caller-chosen shift.
    ///
    /// No range validation is performed; the value is reduced modulo 26
    /// when a transform runs. Negative shifts are valid.
    ///
    /// # Parameters
    /// - `shift`: Signed shift amount.
    pub fn with_shift(shift: i32) -> Self {
        ShiftCipher { shift }
    }

    /// Returns the configured shift amount.
    pub fn shift(&self) -> i32 {
        self.shift
    }

    /// Encrypts `text` by rotating each letter forward by the shift amount.
    ///
    /// Non-letter characters (digits, punctuation, whitespace, non-ASCII)
    /// are copied unchanged. The output always has the same number of
    /// characters as the input.
    pub fn encrypt(&self, text: &str) -> String {
        self.transform(text, self.shift)
    }

    /// Decrypts `text` by rotating each letter backward by the shift amount.
    ///
    /// Exact inverse of [`encrypt`](Self::encrypt) under the same shift.
    pub fn decrypt(&self, text: &str) -> String {
        self.transform(text, -self.shift)
    }

    /// Shared rotation over `text` by `shift` positions (signed).
    fn transform(&self, text: &str, shift: i32) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            out.push(match ch {
                'A'..='Z' => rotate(ch, b'A', shift),
                'a'..='z' => rotate(ch, b'a', shift),
                _ => ch,
            });
        }
        out
    }
}

/// Rotates an ASCII letter within its case's alphabet, wrapping modulo 26.
fn rotate(ch: char, base: u8, shift: i32) -> char {
    let pos = (ch as u8 - base) as i32;
    let rotated = (pos + shift).rem_euclid(ALPHABET_LEN) as u8;
    (base + rotated) as char
}
