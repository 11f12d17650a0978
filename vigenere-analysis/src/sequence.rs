//! Letter sequences over the 26-symbol alphabet

use std::fmt;

use crate::error::{AnalysisError, Result};

/// Number of symbols in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// An ordered sequence of letters, stored as alphabet indices.
///
/// Every element is guaranteed to be in `0..=25` (A=0, B=1, ..., Z=25).
/// Conversion to and from display characters happens only at this boundary;
/// all statistics operate on the indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSequence(Vec<u8>);

impl LetterSequence {
    /// Builds a sequence from pre-normalized text.
    ///
    /// The input must already be uppercase `A`-`Z` with non-letter
    /// characters removed; normalization is the caller's responsibility.
    ///
    /// # Arguments
    ///
    /// * `text` - The normalized input text.
    ///
    /// # Returns
    ///
    /// The sequence, or `InvalidInput` if any character falls outside `A`-`Z`.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut indices = Vec::with_capacity(text.len());
        for c in text.chars() {
            if !c.is_ascii_uppercase() {
                return Err(AnalysisError::InvalidInput(format!(
                    "symbol '{}' is outside the alphabet A-Z",
                    c
                )));
            }
            indices.push(c as u8 - b'A');
        }
        Ok(Self(indices))
    }

    /// Builds a sequence from raw alphabet indices, validating the range.
    pub fn from_indices(indices: Vec<u8>) -> Result<Self> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= ALPHABET_SIZE as u8) {
            return Err(AnalysisError::InvalidInput(format!(
                "index {} is outside the alphabet 0..=25",
                bad
            )));
        }
        Ok(Self(indices))
    }

    /// Internal constructor for indices already known to be in range.
    pub(crate) fn from_raw(indices: Vec<u8>) -> Self {
        debug_assert!(indices.iter().all(|&i| i < ALPHABET_SIZE as u8));
        Self(indices)
    }

    /// Number of symbols in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw alphabet indices.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Counts the occurrences of each letter in the sequence.
    ///
    /// # Returns
    ///
    /// An array of 26 counts for letters A-Z; the counts sum to `len()`.
    pub fn letter_counts(&self) -> [u32; ALPHABET_SIZE] {
        let mut counts = [0u32; ALPHABET_SIZE];
        for &index in &self.0 {
            counts[index as usize] += 1;
        }
        counts
    }
}

impl fmt::Display for LetterSequence {
    /// Renders the sequence as uppercase letters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &index in &self.0 {
            write!(f, "{}", (b'A' + index) as char)?;
        }
        Ok(())
    }
}
