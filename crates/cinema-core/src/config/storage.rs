//! Poster storage configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Filesystem layout for uploaded movie posters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory all runtime data lives under.
    pub data_root: String,
    /// Poster directory, relative to `data_root`.
    pub posters_dir: String,
    /// Largest accepted upload in bytes.
    pub max_upload_size_bytes: u64,
}

impl StorageConfig {
    /// Absolute path of the poster directory.
    pub fn posters_path(&self) -> PathBuf {
        Path::new(&self.data_root).join(&self.posters_dir)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_root: "./data".into(),
            posters_dir: "posters".into(),
            max_upload_size_bytes: 10 * 1024 * 1024,
        }
    }
}
