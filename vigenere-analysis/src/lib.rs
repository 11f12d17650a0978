//! # Vigenère Analysis Library
//!
//! Statistical cryptanalysis of the Vigenère family of polyalphabetic
//! substitution ciphers: recovering the secret repeating key from the
//! ciphertext alone, with no known plaintext.
//!
//! ## Pipeline
//!
//! 1. **Key length search** — candidate periods are scored by the average
//!    index of coincidence of their ciphertext columns
//!    ([`key_length::find_key_length`]).
//! 2. **Key recovery** — at the found period, every column is a Caesar
//!    cipher; frequency analysis against a reference language model yields
//!    each key letter independently ([`key_recovery::recover_key`]).
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_analysis::{cipher, break_cipher, FrequencyModel, LetterSequence};
//!
//! let plain = LetterSequence::from_text(
//!     "THEINDEXOFCOINCIDENCEMEASURESHOWLIKELYTWORANDOMLYCHOSENLETTERS\
//!      OFATEXTAREIDENTICALENGLISHPROSESITSNEARSIXTYFIVETHOUSANDTHSWHILE\
//!      UNIFORMLYRANDOMTEXTSITSNEARONEOVERTWENTYSIXTHATGAPISWHATBETRAYS\
//!      THEPERIODOFAPOLYALPHABETICCIPHERTOTHISKINDOFSTATISTICALATTACK",
//! )?;
//! let key = LetterSequence::from_text("LEMON")?;
//! let ciphertext = cipher::encrypt(&plain, &key)?;
//!
//! let model = FrequencyModel::english();
//! let recovered = break_cipher(&ciphertext, &model)?;
//! assert_eq!(recovered.key.to_string(), "LEMON");
//! # Ok::<(), vigenere_analysis::AnalysisError>(())
//! ```
//!
//! All operations are pure and synchronous; the frequency model is read-only
//! after construction, so independent analyses can run concurrently without
//! locking.

pub mod caesar;
pub mod cipher;
pub mod coincidence;
pub mod columns;
pub mod error;
pub mod key_length;
pub mod key_recovery;
pub mod model;
pub mod sequence;

// Re-exports for easy access
pub use caesar::{recover_shift, ShiftFit};
pub use coincidence::index_of_coincidence;
pub use columns::extract_column;
pub use error::{AnalysisError, Result};
pub use key_length::{average_column_ic, find_key_length};
pub use key_recovery::{break_cipher, recover_key, RecoveredKey};
pub use model::FrequencyModel;
pub use sequence::{LetterSequence, ALPHABET_SIZE};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
