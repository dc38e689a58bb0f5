//! Errors raised while reading chart rows.

use std::fmt;

/// A cell that could not be read as a number.
///
/// Row transforms report these per row. [`crate::points::Points`] logs them
/// and skips the row.
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    /// The row has no value for `field`.
    MissingField { row: usize, field: String },

    /// The row's value for `field` is not a finite number.
    NonNumeric {
        row: usize,
        field: String,
        value: String,
    },
}

impl DataError {
    /// Index of the offending row.
    pub fn row(&self) -> usize {
        match self {
            DataError::MissingField { row, .. } | DataError::NonNumeric { row, .. } => *row,
        }
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::MissingField { row, field } => {
                write!(f, "Row {} has no '{}' field", row, field)
            }
            DataError::NonNumeric { row, field, value } => {
                write!(f, "Row {} field '{}' is not numeric: '{}'", row, field, value)
            }
        }
    }
}

impl std::error::Error for DataError {}

pub type Result<T> = std::result::Result<T, DataError>;
