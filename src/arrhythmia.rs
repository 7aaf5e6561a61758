use std::fmt;
use std::path::{Path, PathBuf};

use ndarray::{ArrayView2, ArrayView3};

use crate::config::LoaderConfig;
use crate::data::loader::read_split;
use crate::data::model::{Split, SplitData, NUM_CHANNELS, NUM_CLASSES, SEQUENCE_LENGTH};
use crate::data::transform::to_split_data;
use crate::dataset::Dataset;
use crate::error::{DatasetError, Result};

// ---------------------------------------------------------------------------
// ArrhythmiaDataset – MIT-BIH heartbeat classification data
// ---------------------------------------------------------------------------

/// The MIT-BIH arrhythmia beat dataset rooted at a directory holding
/// `mitbih_train.csv` and `mitbih_test.csv`.
///
/// Each row of those files is 187 signal values followed by a class label in
/// `0..5`. Loading yields features of shape `(N, 187, 1)`, rescaled by the
/// configured affine map, and one-hot labels of shape `(N, 5)`.
#[derive(Debug, Clone)]
pub struct ArrhythmiaDataset {
    data_dir: PathBuf,
    train_path: PathBuf,
    test_path: PathBuf,
    config: LoaderConfig,
    input_shape: [usize; 2],
    output_shape: [usize; 1],
    /// Train and test arrays, `None` until the first successful load.
    loaded: Option<(SplitData, SplitData)>,
}

impl ArrhythmiaDataset {
    /// Bind to `data_dir` with the default config, loading right away when
    /// `load_data` is true.
    pub fn new(data_dir: impl AsRef<Path>, load_data: bool) -> Result<Self> {
        Self::with_config(data_dir, load_data, LoaderConfig::default())
    }

    /// Fails with [`DatasetError::MissingFile`] if the train file, then the
    /// test file, is not a regular file. Nothing is parsed before both checks.
    pub fn with_config(
        data_dir: impl AsRef<Path>,
        load_data: bool,
        config: LoaderConfig,
    ) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();

        let train_path = require_file(&data_dir, Split::Train)?;
        let test_path = require_file(&data_dir, Split::Test)?;

        let mut dataset = ArrhythmiaDataset {
            data_dir,
            train_path,
            test_path,
            config,
            input_shape: [SEQUENCE_LENGTH, NUM_CHANNELS],
            output_shape: [NUM_CLASSES],
            loaded: None,
        };

        if load_data {
            dataset.load()?;
        }
        Ok(dataset)
    }

    pub fn sequence_length(&self) -> usize {
        SEQUENCE_LENGTH
    }

    pub fn num_classes(&self) -> usize {
        NUM_CLASSES
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn path(&self, split: Split) -> &Path {
        match split {
            Split::Train => &self.train_path,
            Split::Test => &self.test_path,
        }
    }

    pub fn train_path(&self) -> &Path {
        &self.train_path
    }

    pub fn test_path(&self) -> &Path {
        &self.test_path
    }

    pub fn train(&self) -> Option<&SplitData> {
        self.loaded.as_ref().map(|(train, _)| train)
    }

    pub fn test(&self) -> Option<&SplitData> {
        self.loaded.as_ref().map(|(_, test)| test)
    }

    pub fn x_train(&self) -> Option<ArrayView3<'_, f64>> {
        self.train().map(SplitData::features)
    }

    pub fn y_train(&self) -> Option<ArrayView2<'_, f64>> {
        self.train().map(SplitData::labels)
    }

    pub fn x_test(&self) -> Option<ArrayView3<'_, f64>> {
        self.test().map(SplitData::features)
    }

    pub fn y_test(&self) -> Option<ArrayView2<'_, f64>> {
        self.test().map(SplitData::labels)
    }

    fn read(&self, split: Split) -> Result<SplitData> {
        let path = self.path(split);
        let raw = read_split(path, SEQUENCE_LENGTH)?;
        let data = to_split_data(raw, self.config.rescale, NUM_CLASSES, path)?;
        log::info!("loaded {} split: {} samples", split, data.len());
        Ok(data)
    }
}

fn require_file(data_dir: &Path, split: Split) -> Result<PathBuf> {
    let path = data_dir.join(split.file_name());
    if !path.is_file() {
        return Err(DatasetError::MissingFile { split, path });
    }
    Ok(path)
}

impl Dataset for ArrhythmiaDataset {
    fn load(&mut self) -> Result<()> {
        let train = self.read(Split::Train)?;
        let test = self.read(Split::Test)?;
        self.loaded = Some((train, test));
        Ok(())
    }

    fn directory_path(&self) -> &Path {
        &self.data_dir
    }

    fn input_shape(&self) -> &[usize] {
        &self.input_shape
    }

    fn output_shape(&self) -> &[usize] {
        &self.output_shape
    }

    fn split(&self, split: Split) -> Option<&SplitData> {
        match split {
            Split::Train => self.train(),
            Split::Test => self.test(),
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ArrhythmiaDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [steps, channels] = self.input_shape;
        writeln!(f, "MIT-BIH Arrhythmia Dataset")?;
        writeln!(f, "Num classes: {}", NUM_CLASSES)?;
        writeln!(f, "Input shape: ({steps}, {channels})")
    }
}
