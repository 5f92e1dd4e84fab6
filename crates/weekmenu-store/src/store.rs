//! The on-disk data directory and JSON file access.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::StoreConfig;

/// Catalog file name inside the data directory.
pub const MEALS_FILE: &str = "meals.json";
/// Current week plan file name inside the data directory.
pub const PLAN_FILE: &str = "plan.json";
/// Plan history file name inside the data directory.
pub const HISTORY_FILE: &str = "history.json";

/// Errors raised while reading or writing a collection file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create data directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("malformed JSON in {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Handle to the data directory holding the three collections.
///
/// There is no locking: a single process is assumed to own the directory.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open the data directory described by `config`, creating it if needed.
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let root = config.data_dir.clone();
        if !root.is_dir() {
            std::fs::create_dir_all(&root).map_err(|source| StoreError::CreateDir {
                path: root.clone(),
                source,
            })?;
            info!(dir = %root.display(), "data directory created");
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of a collection file.
    pub fn path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    /// Whether a collection file has been written before.
    pub fn exists(&self, file: &str) -> bool {
        self.path(file).is_file()
    }

    /// Read and decode a collection. Returns `None` when the file is absent.
    pub fn read<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>, StoreError> {
        let path = self.path(file);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "collection absent");
                return Ok(None);
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        let value = serde_json::from_str(&contents)
            .map_err(|source| StoreError::Decode { path: path.clone(), source })?;
        debug!(path = %path.display(), bytes = contents.len(), "collection read");
        Ok(Some(value))
    }

    /// Encode and overwrite a collection.
    pub fn write<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        let path = self.path(file);
        let contents = serde_json::to_string_pretty(value)
            .map_err(|source| StoreError::Encode { path: path.clone(), source })?;
        std::fs::write(&path, &contents)
            .map_err(|source| StoreError::Write { path: path.clone(), source })?;
        debug!(path = %path.display(), bytes = contents.len(), "collection written");
        Ok(())
    }
}
