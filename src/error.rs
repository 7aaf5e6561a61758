use std::path::PathBuf;

use thiserror::Error;

use crate::data::model::Split;

/// Errors raised while locating, configuring, or parsing the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A required split file is missing or is not a regular file.
    #[error("{split} file must exist: {}", path.display())]
    MissingFile { split: Split, path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A field could not be parsed as a number.
    #[error("{}: row {row}, column {column}: '{token}' is not a number", path.display())]
    Parse {
        path: PathBuf,
        row: usize,
        column: usize,
        token: String,
    },

    /// A row does not have the expected number of columns.
    #[error("{}: row {row} has {found} columns, expected {expected}", path.display())]
    ShapeMismatch {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A label does not name one of the known classes after truncation.
    #[error("{}: row {row}: label {value} is outside [0, {num_classes})", path.display())]
    LabelRange {
        path: PathBuf,
        row: usize,
        value: f64,
        num_classes: usize,
    },

    #[error("invalid loader config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, DatasetError>;
