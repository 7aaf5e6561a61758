use std::fmt;

use ndarray::{Array2, Array3, ArrayView2, ArrayView3, Axis};

// ---------------------------------------------------------------------------
// Fixed geometry of the MIT-BIH beat dataset
// ---------------------------------------------------------------------------

/// Timesteps per heartbeat sample.
pub const SEQUENCE_LENGTH: usize = 187;

/// Channels per timestep.
pub const NUM_CHANNELS: usize = 1;

/// Beat classes (N, S, V, F, Q).
pub const NUM_CLASSES: usize = 5;

// ---------------------------------------------------------------------------
// Split – a named partition of the dataset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Test,
}

impl Split {
    pub const ALL: [Split; 2] = [Split::Train, Split::Test];

    /// File name of this split inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Split::Train => "mitbih_train.csv",
            Split::Test => "mitbih_test.csv",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Split::Train => write!(f, "train"),
            Split::Test => write!(f, "test"),
        }
    }
}

// ---------------------------------------------------------------------------
// RawSplit – one parsed CSV file before any transform
// ---------------------------------------------------------------------------

/// Row-major feature values plus the raw label column of one file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSplit {
    /// `rows * features_per_row` values.
    pub features: Vec<f64>,
    /// One raw label per row, exactly as written in the file.
    pub labels: Vec<f64>,
    pub features_per_row: usize,
}

impl RawSplit {
    pub fn rows(&self) -> usize {
        self.labels.len()
    }
}

// ---------------------------------------------------------------------------
// SplitData – model-ready arrays of one split
// ---------------------------------------------------------------------------

/// Feature tensor `(N, 187, 1)` and one-hot label matrix `(N, 5)` of a split.
///
/// Both arrays are built together, so they always hold the same number of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitData {
    features: Array3<f64>,
    labels: Array2<f64>,
}

impl SplitData {
    pub(crate) fn new(features: Array3<f64>, labels: Array2<f64>) -> Self {
        debug_assert_eq!(features.len_of(Axis(0)), labels.nrows());
        SplitData { features, labels }
    }

    pub fn features(&self) -> ArrayView3<'_, f64> {
        self.features.view()
    }

    pub fn labels(&self) -> ArrayView2<'_, f64> {
        self.labels.view()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.labels.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples per class, indexed by class id.
    pub fn class_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.labels.ncols()];
        for row in self.labels.rows() {
            if let Some(class) = row.iter().position(|&v| v == 1.0) {
                counts[class] += 1;
            }
        }
        counts
    }

    pub fn into_arrays(self) -> (Array3<f64>, Array2<f64>) {
        (self.features, self.labels)
    }
}
