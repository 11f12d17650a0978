//! Column extraction for periodic ciphers

use crate::error::{AnalysisError, Result};
use crate::sequence::LetterSequence;

/// Extracts the column of symbols at positions `offset`, `offset + stride`,
/// `offset + 2 * stride`, ... from the sequence.
///
/// In a Vigenère ciphertext of period `stride`, the column at `offset`
/// contains exactly the symbols enciphered under key position `offset`.
/// A trailing partial element is included whenever its index is still in
/// bounds.
///
/// # Arguments
///
/// * `seq` - The sequence to partition.
/// * `offset` - Starting position, must satisfy `offset < stride`.
/// * `stride` - Distance between extracted symbols, must be nonzero.
///
/// # Returns
///
/// The extracted column, or `InvalidInput` for a bad offset/stride pair.
pub fn extract_column(seq: &LetterSequence, offset: usize, stride: usize) -> Result<LetterSequence> {
    if stride == 0 || offset >= stride {
        return Err(AnalysisError::InvalidInput(format!(
            "column offset {} must be smaller than stride {}",
            offset, stride
        )));
    }

    let column: Vec<u8> = seq
        .as_slice()
        .iter()
        .skip(offset)
        .step_by(stride)
        .copied()
        .collect();

    Ok(LetterSequence::from_raw(column))
}
