//! Collector configuration, loaded from TOML by the CLI.

use serde::{Deserialize, Serialize};
use std::{
    fs::{read_to_string, write},
    path::{Path, PathBuf},
};

use crate::error::OrgnoteError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Directory walked for `.org` documents.
    pub root: PathBuf,
    /// Rename referenced images to unique names while collecting.
    #[serde(default = "default_rename_images")]
    pub rename_images: bool,
}

fn default_rename_images() -> bool {
    true
}

impl Default for CollectorConfig {
    fn default() -> Self {
        CollectorConfig {
            root: PathBuf::from("."),
            rename_images: true,
        }
    }
}

impl CollectorConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OrgnoteError> {
        tracing::debug!("Reading collector config from {:?}", path.as_ref());
        let content = read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), OrgnoteError> {
        tracing::debug!("Writing collector config to {:?}", path.as_ref());
        let toml_string = toml::to_string(self)?;
        Ok(write(path, toml_string)?)
    }
}
