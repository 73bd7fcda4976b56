//! One pretty-printed JSON file per category inside a data directory.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::StoreError;
use crate::records::{Category, Store};

/// [`Store`] backed by `<data_dir>/<category>.json` files.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a crash mid-save leaves the previous document intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Store rooted at `data_dir`. The directory is created on the first
    /// write; reads from a missing directory see no saved data.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn path_for(&self, category: Category) -> PathBuf {
        self.data_dir.join(category.file_name())
    }
}

impl Store for JsonFileStore {
    fn read(&self, category: Category) -> Result<Option<Value>, StoreError> {
        let path = self.path_for(category);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no saved data yet");
                return Ok(None);
            }
            Err(e) => {
                return Err(StoreError::Io {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| StoreError::Json {
                context: path.display().to_string(),
                source: e,
            })
    }

    fn write(&self, category: Category, value: &Value) -> Result<(), StoreError> {
        let path = self.path_for(category);
        let io_err = |source: std::io::Error| StoreError::Io {
            path: path.display().to_string(),
            source,
        };

        let body = serde_json::to_vec_pretty(value).map_err(|e| StoreError::Json {
            context: path.display().to_string(),
            source: e,
        })?;

        std::fs::create_dir_all(&self.data_dir).map_err(|e| StoreError::Io {
            path: self.data_dir.display().to_string(),
            source: e,
        })?;
        let mut tmp = tempfile::NamedTempFile::new_in(&self.data_dir).map_err(io_err)?;
        tmp.write_all(&body).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&path).map_err(|e| io_err(e.error))?;

        tracing::debug!(path = %path.display(), bytes = body.len(), "saved category");
        Ok(())
    }
}
