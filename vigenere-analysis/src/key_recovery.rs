//! Full key recovery for a known period

use crate::caesar::recover_shift;
use crate::columns::extract_column;
use crate::error::{AnalysisError, Result};
use crate::key_length::find_key_length;
use crate::model::FrequencyModel;
use crate::sequence::LetterSequence;

/// A recovered key together with the fit score of every key position.
///
/// The recovery has no internal consistency check between columns, so the
/// scores are the caller's only handle on plausibility: a column whose score
/// is far above the others usually means the period was wrong or the
/// ciphertext too short.
#[derive(Debug, Clone, PartialEq)]
pub struct RecoveredKey {
    /// The recovered key, one letter per key position.
    pub key: LetterSequence,
    /// Squared-deviation score of each column's best shift, indexed by key
    /// position. Lower is better.
    pub column_scores: Vec<f64>,
}

impl RecoveredKey {
    /// The worst (largest) column fit score.
    pub fn worst_score(&self) -> f64 {
        self.column_scores
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Recovers the key of a ciphertext with a known period.
///
/// For every key position i in 0..period the column at offset i (stride =
/// period) is extracted and handed to the Caesar analyzer; the recovered
/// shifts assembled in order form the key. Correctness is entirely
/// contingent on the period being the true key length.
///
/// # Arguments
///
/// * `seq` - The ciphertext.
/// * `period` - The key length; must satisfy `1 <= period < seq.len()`.
/// * `model` - The reference letter distribution.
///
/// # Returns
///
/// The key and per-column scores, or `InvalidInput` for a period outside
/// the valid range.
pub fn recover_key(
    seq: &LetterSequence,
    period: usize,
    model: &FrequencyModel,
) -> Result<RecoveredKey> {
    if period == 0 || period >= seq.len() {
        return Err(AnalysisError::InvalidInput(format!(
            "period {} is outside 1..{}",
            period,
            seq.len()
        )));
    }

    let mut key = Vec::with_capacity(period);
    let mut column_scores = Vec::with_capacity(period);

    for offset in 0..period {
        let column = extract_column(seq, offset, period)?;
        let fit = recover_shift(&column, model)?;
        key.push(fit.shift);
        column_scores.push(fit.score);
    }

    Ok(RecoveredKey {
        key: LetterSequence::from_raw(key),
        column_scores,
    })
}

/// Runs the full ciphertext-only attack: key length search, then key
/// recovery at the found period.
///
/// A `PeriodNotFound` from the search propagates unchanged; there is no
/// fallback period to guess at.
pub fn break_cipher(seq: &LetterSequence, model: &FrequencyModel) -> Result<RecoveredKey> {
    let period = find_key_length(seq, model)?;
    recover_key(seq, period, model)
}
