//! Vigenère stream primitives

use crate::error::{AnalysisError, Result};
use crate::sequence::{LetterSequence, ALPHABET_SIZE};

const M: u8 = ALPHABET_SIZE as u8;

/// Encrypts a plaintext sequence with a repeating key.
///
/// `cipher[i] = (plain[i] + key[i mod key_len]) mod 26`
///
/// # Arguments
///
/// * `plain` - The plaintext sequence.
/// * `key` - The key sequence; must not be empty.
///
/// # Returns
///
/// The ciphertext sequence, or `InvalidInput` for an empty key.
pub fn encrypt(plain: &LetterSequence, key: &LetterSequence) -> Result<LetterSequence> {
    let key = nonempty(key)?;
    let out: Vec<u8> = plain
        .as_slice()
        .iter()
        .zip(key.iter().cycle())
        .map(|(&p, &k)| (p + k) % M)
        .collect();
    Ok(LetterSequence::from_raw(out))
}

/// Decrypts a ciphertext sequence with a repeating key.
///
/// `plain[i] = (cipher[i] - key[i mod key_len] + 26) mod 26`
///
/// # Arguments
///
/// * `cipher` - The ciphertext sequence.
/// * `key` - The key sequence; must not be empty.
///
/// # Returns
///
/// The plaintext sequence, or `InvalidInput` for an empty key.
pub fn decrypt(cipher: &LetterSequence, key: &LetterSequence) -> Result<LetterSequence> {
    let key = nonempty(key)?;
    let out: Vec<u8> = cipher
        .as_slice()
        .iter()
        .zip(key.iter().cycle())
        .map(|(&c, &k)| (c + M - k) % M)
        .collect();
    Ok(LetterSequence::from_raw(out))
}

fn nonempty(key: &LetterSequence) -> Result<&[u8]> {
    if key.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "key must contain at least one letter".to_string(),
        ));
    }
    Ok(key.as_slice())
}
