use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::transform::Rescale;
use crate::error::{DatasetError, Result};

/// Loader settings. Every field is optional in the JSON form.
///
/// ```json
/// { "rescale": { "scale": 2.0, "offset": -1.0 } }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Affine map applied to every signal value on load.
    pub rescale: Rescale,
}

impl LoaderConfig {
    pub fn from_json_str(text: &str, origin: &Path) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| DatasetError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| DatasetError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_json_str(&text, path)?;
        log::debug!("loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    pub fn with_rescale(mut self, rescale: Rescale) -> Self {
        self.rescale = rescale;
        self
    }
}
