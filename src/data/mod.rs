/// Data layer: split files, parsing, and tensor transforms.
///
/// Architecture:
/// ```text
///  mitbih_train.csv / mitbih_test.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → RawSplit (flat features + raw labels)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ transform  │  rescale features, one-hot labels
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ SplitData  │  (N, 187, 1) features, (N, 5) labels
///   └───────────┘
/// ```

pub mod loader;
pub mod model;
pub mod transform;
