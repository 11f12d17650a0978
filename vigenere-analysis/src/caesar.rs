//! Single-shift (Caesar) recovery by frequency analysis

use crate::error::{AnalysisError, Result};
use crate::model::FrequencyModel;
use crate::sequence::{LetterSequence, ALPHABET_SIZE};

/// A recovered Caesar shift together with its deviation score.
///
/// Lower scores mean a closer match between the un-shifted sequence and the
/// reference distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftFit {
    /// The recovered shift, in `0..=25`.
    pub shift: u8,
    /// Sum of squared deviations from the reference frequencies.
    pub score: f64,
}

/// Recovers the most likely Caesar shift of a sequence.
///
/// For every candidate shift s in ascending order 0..26, the sequence is
/// un-shifted by s and its normalized letter distribution compared against
/// the model: score = sum over the 26 letters of (observed - expected)^2.
/// The shift with the minimal score wins; ties resolve to the lowest s.
///
/// The statistic is a simplified squared deviation, not a true chi-squared
/// test (the division by the expected value is omitted). The simplification
/// is kept deliberately; it ranks candidate shifts just as reliably on
/// natural-language input.
///
/// # Arguments
///
/// * `seq` - The sequence to analyze, typically one ciphertext column.
/// * `model` - The reference letter distribution.
///
/// # Returns
///
/// The best shift and its score, or `InvalidInput` for an empty sequence.
pub fn recover_shift(seq: &LetterSequence, model: &FrequencyModel) -> Result<ShiftFit> {
    if seq.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "cannot recover a shift from an empty sequence".to_string(),
        ));
    }

    let counts = seq.letter_counts();
    let n = seq.len() as f64;

    let mut best = ShiftFit {
        shift: 0,
        score: f64::INFINITY,
    };

    for shift in 0..ALPHABET_SIZE {
        let mut score = 0.0;
        for letter in 0..ALPHABET_SIZE {
            // Plaintext letter `letter` appears in the ciphertext as
            // `letter + shift`, so read the count at the rotated index
            // instead of materializing the un-shifted sequence.
            let observed = counts[(letter + shift) % ALPHABET_SIZE] as f64 / n;
            let deviation = observed - model.expected(letter);
            score += deviation * deviation;
        }

        // Strict comparison keeps the lowest shift on ties.
        if score < best.score {
            best = ShiftFit {
                shift: shift as u8,
                score,
            };
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher;

    #[test]
    fn test_empty_sequence_is_an_error() {
        let empty = LetterSequence::from_text("").unwrap();
        let model = FrequencyModel::english();
        assert!(matches!(
            recover_shift(&empty, &model),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unshifted_english_sample_yields_zero() {
        let model = FrequencyModel::english();
        // ETAOIN-heavy sample; shift 0 must beat every rotation.
        let seq = LetterSequence::from_text(
            "THEREISNOTHINGEITHERGOODORBADBUTTHINKINGMAKESITSOTHEREST",
        )
        .unwrap();
        let fit = recover_shift(&seq, &model).unwrap();
        assert_eq!(fit.shift, 0);
    }

    #[test]
    fn test_shift_recovered_from_caesar_ciphertext() {
        let model = FrequencyModel::english();
        let plain = LetterSequence::from_text(
            "ALLTHEWORLDSASTAGEANDALLTHEMENANDWOMENMERELYPLAYERSTHEYHAVE\
             THEIREXITSANDTHEIRENTRANCESANDONEMANINHISTIMEPLAYSMANYPARTS",
        )
        .unwrap();

        for shift in [1u8, 7, 13, 25] {
            let key = LetterSequence::from_indices(vec![shift]).unwrap();
            let ciphertext = cipher::encrypt(&plain, &key).unwrap();
            let fit = recover_shift(&ciphertext, &model).unwrap();
            assert_eq!(fit.shift, shift);
        }
    }

    #[test]
    fn test_score_is_nonnegative_and_bounded() {
        let model = FrequencyModel::english();
        let seq = LetterSequence::from_raw(vec![16; 40]); // all Q
        let fit = recover_shift(&seq, &model).unwrap();
        assert!(fit.score >= 0.0);
        // One letter at frequency 1 against a ~1-summing table stays below 2.
        assert!(fit.score < 2.0);
    }
}
