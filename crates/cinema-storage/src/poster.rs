//! Poster file storage on the local filesystem.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use cinema_core::config::storage::StorageConfig;
use cinema_core::error::{AppError, ErrorKind};
use cinema_core::result::AppResult;

/// Stores uploaded poster images under a configured root directory.
///
/// Filenames are generated, never taken from the upload, so a stored name
/// is safe to embed in URLs and database rows.
#[derive(Debug, Clone)]
pub struct PosterStore {
    /// Root directory for all stored posters.
    root: PathBuf,
}

impl PosterStore {
    /// Create a new poster store rooted at the configured poster directory.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        let root = config.posters_path();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create poster root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Root directory posters are stored under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write poster bytes and return the generated filename.
    ///
    /// The extension is carried over from the uploaded name when it is a
    /// short alphanumeric suffix; everything else of the original name is
    /// discarded.
    pub async fn save(&self, original_name: &str, data: Bytes) -> AppResult<String> {
        let filename = match sanitized_extension(original_name) {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
            None => Uuid::new_v4().to_string(),
        };

        let full_path = self.root.join(&filename);
        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write poster: {filename}"),
                e,
            )
        })?;

        debug!(filename, bytes = data.len(), "Stored poster");
        Ok(filename)
    }

    /// Delete a stored poster. Deleting an absent file is not an error.
    pub async fn delete(&self, filename: &str) -> AppResult<()> {
        let full_path = self.resolve(filename)?;
        match fs::remove_file(&full_path).await {
            Ok(()) => {
                debug!(filename, "Deleted poster");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete poster: {filename}"),
                e,
            )),
        }
    }

    /// Check whether a stored poster exists.
    pub async fn exists(&self, filename: &str) -> AppResult<bool> {
        let full_path = self.resolve(filename)?;
        Ok(fs::try_exists(&full_path).await.unwrap_or(false))
    }

    /// Resolve a stored filename to its absolute path, rejecting anything
    /// that is not a bare filename.
    fn resolve(&self, filename: &str) -> AppResult<PathBuf> {
        let name = Path::new(filename)
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| *n == filename)
            .ok_or_else(|| {
                AppError::new(ErrorKind::Storage, format!("Invalid poster name: {filename}"))
            })?;
        Ok(self.root.join(name))
    }
}

/// Extract a short alphanumeric extension from an uploaded filename.
fn sanitized_extension(original_name: &str) -> Option<String> {
    let ext = Path::new(original_name).extension()?.to_str()?;
    if ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        Some(ext.to_ascii_lowercase())
    } else {
        None
    }
}
