// In crates/market-data/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Input file not found.")]
    InputNotFound,

    #[error("Input CSV file is empty.")]
    EmptyInput,

    #[error("Required column '{0}' not found in dataset.")]
    MissingColumn(&'static str),

    #[error("Could not parse '{value}' as a number in column 'close' (row {row}).")]
    InvalidClose { row: usize, value: String },

    #[error("Row {row} has {found} fields but the header has {expected}.")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
