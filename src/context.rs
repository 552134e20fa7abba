//! Editor root resolution for syncsave commands.
//!
//! The engine compares paths lexically, so every path handed to it must be
//! absolute and spelled the same way. This module turns CLI arguments into
//! canonical absolute paths (via `dunce`, which avoids `\\?\` prefixes on
//! Windows) before they reach the engine.

use crate::error::{Result, SyncError};
use std::env;
use std::path::{Path, PathBuf};

/// Resolved paths for one syncsave invocation. All paths are absolute.
#[derive(Debug, Clone)]
pub struct EditorContext {
    /// The editor root ("workspace"): saves outside it are ignored.
    pub root: PathBuf,
}

impl EditorContext {
    /// Resolve the editor root from `--root`, or the current directory.
    pub fn resolve(root: Option<&Path>) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            SyncError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(&cwd, root)
    }

    /// Resolve the editor root relative to a known working directory.
    pub fn resolve_from(cwd: &Path, root: Option<&Path>) -> Result<Self> {
        let root = match root {
            Some(root) => cwd.join(root),
            None => cwd.to_path_buf(),
        };

        if !root.is_dir() {
            return Err(SyncError::UserError(format!(
                "editor root '{}' is not a directory",
                root.display()
            )));
        }

        let root = canonicalize(&root)?;
        Ok(Self { root })
    }

    /// Resolve a file argument (relative to the current directory) to a
    /// canonical absolute path. The file must exist.
    pub fn resolve_file(&self, file: &Path) -> Result<PathBuf> {
        let cwd = env::current_dir().map_err(|e| {
            SyncError::UserError(format!("failed to get current working directory: {}", e))
        })?;
        let path = cwd.join(file);

        if !path.is_file() {
            return Err(SyncError::UserError(format!(
                "'{}' is not a file",
                path.display()
            )));
        }

        canonicalize(&path)
    }
}

fn canonicalize(path: &Path) -> Result<PathBuf> {
    dunce::canonicalize(path).map_err(|e| {
        SyncError::UserError(format!("failed to resolve '{}': {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn resolve_from_defaults_to_cwd() {
        let temp = TempDir::new().unwrap();
        let ctx = EditorContext::resolve_from(temp.path(), None).unwrap();
        assert_eq!(ctx.root, dunce::canonicalize(temp.path()).unwrap());
    }

    #[test]
    fn resolve_from_joins_relative_root() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("ws")).unwrap();

        let ctx = EditorContext::resolve_from(temp.path(), Some(Path::new("ws"))).unwrap();

        assert_eq!(ctx.root, dunce::canonicalize(temp.path().join("ws")).unwrap());
    }

    #[test]
    fn resolve_from_rejects_missing_root() {
        let temp = TempDir::new().unwrap();
        let err = EditorContext::resolve_from(temp.path(), Some(Path::new("nope"))).unwrap_err();
        assert!(matches!(err, SyncError::UserError(_)));
    }
}
