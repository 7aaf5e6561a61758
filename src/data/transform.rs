use std::path::Path;

use ndarray::{Array2, Array3};
use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, Result};

use super::model::{RawSplit, SplitData};

// ---------------------------------------------------------------------------
// Feature rescaling
// ---------------------------------------------------------------------------

/// Affine map `v * scale + offset` applied to every signal value.
///
/// The default maps the [0, 1] range of the published beats onto [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rescale {
    pub scale: f64,
    pub offset: f64,
}

impl Default for Rescale {
    fn default() -> Self {
        Rescale {
            scale: 2.0,
            offset: -1.0,
        }
    }
}

impl Rescale {
    pub fn new(scale: f64, offset: f64) -> Self {
        Rescale { scale, offset }
    }

    /// Leaves values untouched.
    pub fn identity() -> Self {
        Rescale::new(1.0, 0.0)
    }

    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }
}

// ---------------------------------------------------------------------------
// Label encoding
// ---------------------------------------------------------------------------

/// Cast a raw label to a class index: truncate toward zero, then bounds-check.
pub fn class_index(value: f64, num_classes: usize) -> Option<usize> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated < 0.0 || truncated >= num_classes as f64 {
        return None;
    }
    Some(truncated as usize)
}

/// One-hot encode raw labels into an `(N, num_classes)` matrix.
///
/// On failure the error carries the zero-based position of the first bad label.
pub fn one_hot(labels: &[f64], num_classes: usize) -> std::result::Result<Array2<f64>, usize> {
    let mut encoded = Array2::zeros((labels.len(), num_classes));
    for (i, &value) in labels.iter().enumerate() {
        let class = class_index(value, num_classes).ok_or(i)?;
        encoded[[i, class]] = 1.0;
    }
    Ok(encoded)
}

// ---------------------------------------------------------------------------
// RawSplit -> SplitData
// ---------------------------------------------------------------------------

/// Build the model-ready arrays of one split.
///
/// Features get a trailing channel axis and are rescaled; labels are one-hot
/// encoded into `num_classes` columns.
pub fn to_split_data(
    raw: RawSplit,
    rescale: Rescale,
    num_classes: usize,
    origin: &Path,
) -> Result<SplitData> {
    let rows = raw.rows();

    let labels = one_hot(&raw.labels, num_classes).map_err(|i| DatasetError::LabelRange {
        path: origin.to_path_buf(),
        row: i + 1,
        value: raw.labels[i],
        num_classes,
    })?;

    let scaled: Vec<f64> = raw.features.iter().map(|&v| rescale.apply(v)).collect();
    let features = Array3::from_shape_vec((rows, raw.features_per_row, 1), scaled).map_err(
        |_| DatasetError::ShapeMismatch {
            path: origin.to_path_buf(),
            row: rows,
            expected: raw.features_per_row + 1,
            found: raw.features.len() / rows.max(1) + 1,
        },
    )?;

    Ok(SplitData::new(features, labels))
}
