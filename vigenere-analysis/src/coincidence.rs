//! Index of coincidence

use crate::error::{AnalysisError, Result};
use crate::sequence::LetterSequence;

/// Calculates the index of coincidence of a sequence.
///
/// IC = sum of f_i * (f_i - 1) / (n * (n - 1)), where f_i is the count of
/// letter i and n the sequence length. This is the probability that two
/// randomly chosen symbols of the sequence are identical: roughly 1/26
/// (~0.038) for uniform-random text, and noticeably higher (~0.065 for
/// English) for monoalphabetically enciphered natural language.
///
/// # Arguments
///
/// * `seq` - The sequence to analyze.
///
/// # Returns
///
/// The index of coincidence, or `InvalidInput` when the sequence has fewer
/// than 2 symbols and the statistic is undefined.
pub fn index_of_coincidence(seq: &LetterSequence) -> Result<f64> {
    let n = seq.len();
    if n < 2 {
        return Err(AnalysisError::InvalidInput(format!(
            "index of coincidence needs at least 2 symbols, got {}",
            n
        )));
    }

    let counts = seq.letter_counts();
    let numerator: f64 = counts
        .iter()
        .map(|&f| f as f64 * (f as f64 - 1.0))
        .sum();

    Ok(numerator / (n as f64 * (n as f64 - 1.0)))
}
