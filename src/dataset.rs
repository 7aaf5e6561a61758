use std::path::Path;

use crate::data::model::{Split, SplitData};
use crate::error::Result;

/// Common contract of on-disk datasets feeding a training loop.
///
/// A dataset is bound to a directory at construction, fills its splits on
/// [`Dataset::load`], and advertises the per-sample input and output shapes
/// (without the batch dimension) that a model should be built for.
pub trait Dataset {
    /// Parse the split files and replace any previously loaded arrays.
    ///
    /// On error the previously loaded state is kept.
    fn load(&mut self) -> Result<()>;

    /// Directory the dataset reads from.
    fn directory_path(&self) -> &Path;

    /// Shape of one input sample, e.g. `[187, 1]`.
    fn input_shape(&self) -> &[usize];

    /// Shape of one target sample, e.g. `[5]`.
    fn output_shape(&self) -> &[usize];

    /// Loaded arrays of a split, or `None` before the first successful load.
    fn split(&self, split: Split) -> Option<&SplitData>;

    fn is_loaded(&self) -> bool {
        Split::ALL.iter().all(|&s| self.split(s).is_some())
    }

    /// Human-readable multi-line summary.
    fn describe(&self) -> String;
}
