use super::backend::StorageBackend;
use crate::error::{RealtyError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed slots: each key is stored in `<root>/<key>.json`.
pub struct FsBackend {
    root: Option<PathBuf>,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// A backend with nowhere to write. Reads are empty, writes are dropped.
    pub fn unavailable() -> Self {
        Self { root: None }
    }

    /// Path of the file holding `key`. The key must name a file directly
    /// under the root.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        let root = self
            .root
            .as_ref()
            .ok_or_else(|| RealtyError::Store("No data directory available".to_string()))?;
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(RealtyError::Config(format!("Invalid storage key: {}", key)));
        }
        Ok(root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(RealtyError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(RealtyError::Io)?;
        Ok(Some(content))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent)?;
        }

        // Atomic write
        let tmp_path = path.with_file_name(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(RealtyError::Io)?;
        fs::rename(&tmp_path, &path).map_err(RealtyError::Io)?;

        Ok(())
    }

    fn is_available(&self) -> bool {
        self.root.is_some()
    }
}
