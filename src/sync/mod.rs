//! The sync engine.
//!
//! [`SyncSession`] is the entry point a front end drives: it receives save
//! events through [`SyncSession::on_file_saved`] and exposes the
//! init/start/stop commands. It owns the configuration store and the global
//! latch; per-target work lives in [`executor`].
//!
//! # Save event handling
//!
//! 1. Ignore the event when syncing is stopped, when the file is outside the
//!    editor root, or when no `sync.json` governs it.
//! 2. If the saved file is the governing `sync.json`, reload it and stop.
//! 3. Otherwise make sure that configuration is loaded, then run every target.
//!
//! Nothing escapes `on_file_saved`: failures become notifications and
//! [`SaveOutcome`] values so the next save is handled from a clean slate.

pub mod executor;
pub mod line_endings;
pub mod outcome;
pub mod state;


pub use executor::{MirrorPlan, TargetPlan, copy_file, plan_target};
pub use line_endings::normalize_line_endings;
pub use outcome::{SaveOutcome, SkipReason, TargetOutcome, TargetReport};
pub use state::{ConfigSnapshot, ConfigStore, SyncLatch};

use crate::config::{find_config_path, write_template_if_missing};
use crate::error::{Result, SyncError};
use crate::fs::{is_within, normalize_lexically};
use crate::notifier::Notifier;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Engine state for one editor session.
pub struct SyncSession {
    config: ConfigStore,
    latch: SyncLatch,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for SyncSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncSession")
            .field("config", &self.config)
            .field("latch", &self.latch)
            .finish_non_exhaustive()
    }
}

impl SyncSession {
    /// A session with syncing enabled and no configuration loaded.
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            config: ConfigStore::new(),
            latch: SyncLatch::default(),
            notifier,
        }
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    /// Resume syncing for subsequent saves.
    pub fn start(&self) {
        self.latch.start();
        tracing::debug!("syncing started");
    }

    /// Pause syncing; saves are ignored until [`SyncSession::start`].
    pub fn stop(&self) {
        self.latch.stop();
        tracing::debug!("syncing stopped");
    }

    pub fn is_enabled(&self) -> bool {
        self.latch.is_enabled()
    }

    /// Write the template `sync.json` at the editor root if none exists, then
    /// load it.
    ///
    /// Returns the configuration path. A configuration that exists but fails
    /// to parse is reported and returned as an error.
    pub fn init_config(&self, editor_root: &Path) -> Result<PathBuf> {
        let editor_root = normalize_lexically(editor_root);
        let (path, created) = write_template_if_missing(&editor_root)?;
        if created {
            self.notifier
                .status(&format!("Created sync configuration {}", path.display()));
        }

        self.load_config(&path)?;
        Ok(path)
    }

    /// Handle one save event.
    pub fn on_file_saved(&self, saved: &Path, editor_root: &Path) -> SaveOutcome {
        let saved = normalize_lexically(saved);
        let editor_root = normalize_lexically(editor_root);

        if !self.latch.is_enabled() {
            return SaveOutcome::Skipped(SkipReason::SyncDisabled);
        }
        if !is_within(&saved, &editor_root) {
            return SaveOutcome::Skipped(SkipReason::OutsideEditorRoot);
        }

        let config_path = find_config_path(&saved, &editor_root);
        if !config_path.is_file() {
            tracing::debug!(config = %config_path.display(), "no sync configuration");
            return SaveOutcome::Skipped(SkipReason::NoConfig);
        }

        if saved == config_path {
            return match self.load_config(&config_path) {
                Ok(snapshot) => {
                    self.notifier.status("Sync configuration updated");
                    SaveOutcome::ConfigReloaded {
                        path: config_path,
                        version: snapshot.version(),
                    }
                }
                Err(e) => SaveOutcome::ConfigFailed(e),
            };
        }

        let snapshot = match self.config.current_for(&config_path) {
            Some(snapshot) => snapshot,
            None => match self.load_config(&config_path) {
                Ok(snapshot) => snapshot,
                Err(e) => return SaveOutcome::ConfigFailed(e),
            },
        };

        SaveOutcome::Processed(executor::run_targets(
            &snapshot,
            &saved,
            &editor_root,
            self.notifier.as_ref(),
        ))
    }

    /// Compute what a save of `saved` would do, without writing anything and
    /// without touching the session's configuration.
    pub fn preview(&self, saved: &Path, editor_root: &Path) -> Result<(PathBuf, Vec<TargetPlan>)> {
        let saved = normalize_lexically(saved);
        let editor_root = normalize_lexically(editor_root);

        if !is_within(&saved, &editor_root) {
            return Err(SyncError::UserError(format!(
                "'{}' is not under editor root '{}'",
                saved.display(),
                editor_root.display()
            )));
        }

        let config_path = find_config_path(&saved, &editor_root);
        let preview = ConfigStore::new();
        let snapshot = preview.load(&config_path)?;

        let plans = snapshot
            .targets()
            .map(|(target, rules)| {
                plan_target(&saved, &editor_root, snapshot.config_dir(), target, rules)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok((config_path, plans))
    }

    fn load_config(&self, path: &Path) -> Result<Arc<ConfigSnapshot>> {
        match self.config.load(path) {
            Ok(snapshot) => {
                for (index, error) in snapshot.pattern_errors() {
                    self.notifier
                        .error(&format!("targetFolders[{}]: {}", index, error));
                }
                Ok(snapshot)
            }
            Err(e) => {
                tracing::warn!(error = %e, "sync configuration not loaded");
                self.notifier.error(&e.to_string());
                Err(e)
            }
        }
    }
}
