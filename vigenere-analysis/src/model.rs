//! Reference letter-frequency models

use crate::sequence::ALPHABET_SIZE;

/// Relative frequencies of the letters A-Z in English text.
/// The values form a probability distribution (sum is approximately 1).
pub const ENGLISH_FREQUENCIES: [f64; ALPHABET_SIZE] = [
    0.082, 0.015, 0.028, 0.043, 0.127, 0.022, 0.020, 0.061, 0.070, 0.002,
    0.008, 0.040, 0.024, 0.067, 0.075, 0.019, 0.001, 0.060, 0.063, 0.091,
    0.028, 0.010, 0.023, 0.001, 0.020, 0.001,
];

/// Index-of-coincidence acceptance band for monoalphabetic English text.
/// Half-open: a candidate period is accepted when `low < ic <= high`.
pub const ENGLISH_IC_BAND: (f64, f64) = (0.060, 0.080);

/// A reference letter distribution for one language, together with the
/// index-of-coincidence band that text of that language is expected to hit.
///
/// The model is immutable once built; all analysis components borrow it,
/// so the search algorithms stay language-agnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyModel {
    frequencies: [f64; ALPHABET_SIZE],
    ic_band: (f64, f64),
}

impl FrequencyModel {
    /// Creates a model from a 26-entry probability table and an acceptance band.
    ///
    /// # Arguments
    ///
    /// * `frequencies` - Relative frequency of each letter A-Z, summing to ~1.
    /// * `ic_band` - `(low, high)` bounds; an IC is accepted when `low < ic <= high`.
    pub fn new(frequencies: [f64; ALPHABET_SIZE], ic_band: (f64, f64)) -> Self {
        Self {
            frequencies,
            ic_band,
        }
    }

    /// The standard English model.
    pub fn english() -> Self {
        Self::new(ENGLISH_FREQUENCIES, ENGLISH_IC_BAND)
    }

    /// Expected relative frequency of the given letter index.
    pub fn expected(&self, letter: usize) -> f64 {
        self.frequencies[letter]
    }

    /// The full frequency table.
    pub fn frequencies(&self) -> &[f64; ALPHABET_SIZE] {
        &self.frequencies
    }

    /// Whether an average index of coincidence falls inside the acceptance band.
    pub fn band_accepts(&self, ic: f64) -> bool {
        self.ic_band.0 < ic && ic <= self.ic_band.1
    }
}
