//! Error types for cryptanalysis operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No key length in 1..={max_period} scored inside the acceptance band")]
    PeriodNotFound { max_period: usize },

    #[error("Column {offset} of stride {stride} has {len} symbols, index of coincidence needs at least 2")]
    DegenerateColumn {
        offset: usize,
        stride: usize,
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
