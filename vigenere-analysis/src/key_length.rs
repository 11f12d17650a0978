//! Key length (period) search via the index of coincidence

use crate::coincidence::index_of_coincidence;
use crate::columns::extract_column;
use crate::error::{AnalysisError, Result};
use crate::model::FrequencyModel;
use crate::sequence::LetterSequence;

/// Averages the index of coincidence over the `stride` columns of a sequence.
///
/// # Arguments
///
/// * `seq` - The sequence to partition.
/// * `stride` - The candidate period; every column must keep at least 2 symbols.
///
/// # Returns
///
/// The mean column IC, `DegenerateColumn` if any column is too short for a
/// defined IC, or `InvalidInput` for a zero stride.
pub fn average_column_ic(seq: &LetterSequence, stride: usize) -> Result<f64> {
    if stride == 0 {
        return Err(AnalysisError::InvalidInput(
            "stride must be positive".to_string(),
        ));
    }

    let mut total = 0.0;
    for offset in 0..stride {
        let column = extract_column(seq, offset, stride)?;
        if column.len() < 2 {
            return Err(AnalysisError::DegenerateColumn {
                offset,
                stride,
                len: column.len(),
            });
        }
        total += index_of_coincidence(&column)?;
    }

    Ok(total / stride as f64)
}

/// Finds the key length of a polyalphabetic ciphertext.
///
/// Candidate periods k = 1, 2, 3, ... are tried in ascending order; for each,
/// the ciphertext is split into k columns and their ICs averaged. The first
/// k whose average lands inside the model's acceptance band is returned.
/// The search is greedy: it yields the smallest accepted period, which for
/// genuine Vigenère ciphertext is the key length (any multiple of it would
/// also be accepted, but is never reached).
///
/// Candidates run up to `len / 2`, the largest stride at which every column
/// still holds the 2 symbols an IC needs.
///
/// # Arguments
///
/// * `seq` - The ciphertext.
/// * `model` - The language model supplying the acceptance band.
///
/// # Returns
///
/// The accepted period, `PeriodNotFound` when no candidate scores inside the
/// band, or `InvalidInput` for a ciphertext shorter than 2 symbols.
pub fn find_key_length(seq: &LetterSequence, model: &FrequencyModel) -> Result<usize> {
    if seq.len() < 2 {
        return Err(AnalysisError::InvalidInput(format!(
            "key length search needs at least 2 symbols, got {}",
            seq.len()
        )));
    }

    let max_period = seq.len() / 2;
    for period in 1..=max_period {
        let average = average_column_ic(seq, period)?;
        if model.band_accepts(average) {
            return Ok(period);
        }
    }

    Err(AnalysisError::PeriodNotFound { max_period })
}
