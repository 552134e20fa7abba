//! Config loading, discovery, and template operations.

use super::model::SyncConfig;
use super::types::CONFIG_FILE_NAME;
use crate::error::{Result, SyncError};
use crate::fs::atomic_write_file;
use std::io;
use std::path::{Path, PathBuf};

impl SyncConfig {
    /// Load config from a `sync.json` file.
    ///
    /// # Returns
    ///
    /// * `Ok(SyncConfig)` - Successfully parsed config
    /// * `Err(SyncError::ConfigNotFound)` - The file does not exist
    /// * `Err(SyncError::ConfigParse)` - The file is unreadable or not valid JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SyncError::ConfigNotFound(path.to_path_buf()),
            _ => SyncError::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })?;

        Self::from_json(&content, path)
    }

    /// Parse config from a JSON string. `origin` is only used in error messages.
    pub fn from_json(json: &str, origin: &Path) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SyncError::ConfigParse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Serialize config as 2-space indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SyncError::UserError(format!("failed to serialize sync config: {}", e)))
    }
}

/// Locate the `sync.json` governing `saved_file`.
///
/// Walks upward from the file's directory and returns the first directory that
/// holds a `sync.json`. The walk stops before visiting `editor_root` (or at the
/// filesystem root); when nothing is found the editor root's `sync.json` is
/// returned whether or not it exists.
pub fn find_config_path(saved_file: &Path, editor_root: &Path) -> PathBuf {
    let mut dir = saved_file.parent();

    while let Some(current) = dir {
        if current == editor_root || current.parent().is_none() {
            break;
        }
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return candidate;
        }
        dir = current.parent();
    }

    editor_root.join(CONFIG_FILE_NAME)
}

/// Write the template config to `<editor_root>/sync.json` unless one exists.
///
/// Returns the config path and whether it was created by this call.
pub fn write_template_if_missing(editor_root: &Path) -> Result<(PathBuf, bool)> {
    let path = editor_root.join(CONFIG_FILE_NAME);
    if path.exists() {
        return Ok((path, false));
    }

    let json = SyncConfig::template().to_json_pretty()?;
    atomic_write_file(&path, &json)?;
    Ok((path, true))
}
