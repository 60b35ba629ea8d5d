//! Feature tables
//!
//! A [`FeatureFrame`] is a column-oriented table of optional `f64` cells.
//! Reference datasets are loaded from CSV at startup; production batches
//! usually arrive as row-oriented JSON records.

mod frame;
mod load;


pub use frame::{FeatureColumn, FeatureFrame, Record};

/// Errors raised while building a [`FeatureFrame`]
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Column '{column}' has {actual} values, expected {expected}")]
    LengthMismatch { column: String, expected: usize, actual: usize },

    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("Non-numeric value {value:?} in column '{column}' at row {row}")]
    NonNumeric { column: String, row: usize, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
