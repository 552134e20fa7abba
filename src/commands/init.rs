//! Implementation of the `syncsave init` command.
//!
//! Writes the template `sync.json` at the editor root unless one already
//! exists, then checks that the configuration loads. An existing file is never
//! overwritten.

use super::console_session;
use crate::cli::RootArgs;
use crate::context::EditorContext;
use crate::error::{Result, SyncError};

/// Execute the `syncsave init` command.
pub fn cmd_init(args: RootArgs) -> Result<()> {
    let ctx = EditorContext::resolve(args.root.as_deref())?;
    let session = console_session();

    // Parse failures were already reported by the session.
    let path = session.init_config(&ctx.root).map_err(|e| match e {
        SyncError::ConfigParse { path, .. } => SyncError::ConfigNotLoaded(path),
        other => other,
    })?;

    println!("Sync configuration: {}", path.display());
    println!();
    println!("Edit `targetFolders[].path` to point at a destination tree;");
    println!("the default target (\"./\") is the editor root itself and syncs nothing.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SyncConfig;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn init_writes_template_at_root() {
        let temp = TempDir::new().unwrap();

        cmd_init(RootArgs {
            root: Some(temp.path().to_path_buf()),
        })
        .unwrap();

        let config = SyncConfig::load(temp.path().join("sync.json")).unwrap();
        assert_eq!(config, SyncConfig::template());
    }

    #[test]
    fn init_reports_unparseable_existing_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("sync.json"), "{ broken").unwrap();

        let err = cmd_init(RootArgs {
            root: Some(temp.path().to_path_buf()),
        })
        .unwrap_err();

        assert!(matches!(err, SyncError::ConfigNotLoaded(_)));
        assert_eq!(fs::read_to_string(temp.path().join("sync.json")).unwrap(), "{ broken");
    }
}
