use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{DatasetError, Result};

use super::model::RawSplit;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse one headerless, comma-delimited split file.
///
/// Every row must hold `expected_features` signal values followed by a single
/// label column. Blank lines are skipped; an empty file yields zero rows.
pub fn read_split(path: &Path, expected_features: usize) -> Result<RawSplit> {
    log::debug!("reading {}", path.display());
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_split_from_reader(file, path, expected_features)
}

/// Same as [`read_split`] over any reader. `origin` only labels errors.
pub fn read_split_from_reader<R: Read>(
    reader: R,
    origin: &Path,
    expected_features: usize,
) -> Result<RawSplit> {
    let expected_columns = expected_features + 1;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut raw = RawSplit {
        features: Vec::new(),
        labels: Vec::new(),
        features_per_row: expected_features,
    };

    for (index, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|source| DatasetError::Csv {
            path: origin.to_path_buf(),
            source,
        })?;
        let row = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(index + 1);

        if record.len() != expected_columns {
            return Err(DatasetError::ShapeMismatch {
                path: origin.to_path_buf(),
                row,
                expected: expected_columns,
                found: record.len(),
            });
        }

        for (column, token) in record.iter().enumerate() {
            let value = parse_field(token, origin, row, column)?;
            if column == expected_features {
                raw.labels.push(value);
            } else {
                raw.features.push(value);
            }
        }
    }

    Ok(raw)
}

fn parse_field(token: &str, origin: &Path, row: usize, column: usize) -> Result<f64> {
    token.parse::<f64>().map_err(|_| DatasetError::Parse {
        path: origin.to_path_buf(),
        row,
        column,
        token: token.to_string(),
    })
}
