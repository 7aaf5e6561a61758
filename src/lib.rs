//! Loader for the MIT-BIH arrhythmia ECG beat dataset.
//!
//! [`ArrhythmiaDataset`] binds to a directory holding `mitbih_train.csv` and
//! `mitbih_test.csv` and turns them into model-ready `ndarray` tensors.

pub mod arrhythmia;
pub mod config;
pub mod data;
pub mod dataset;
pub mod error;

pub use arrhythmia::ArrhythmiaDataset;
pub use config::LoaderConfig;
pub use data::model::{Split, SplitData, NUM_CHANNELS, NUM_CLASSES, SEQUENCE_LENGTH};
pub use data::transform::Rescale;
pub use dataset::Dataset;
pub use error::{DatasetError, Result};
