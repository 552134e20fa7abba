//! Session state shared across save events.
//!
//! - [`ConfigStore`] holds the current configuration as an immutable,
//!   versioned [`ConfigSnapshot`]. A reload builds a new snapshot and swaps it
//!   in; readers holding the old `Arc` keep a consistent view.
//! - [`SyncLatch`] is the global "syncing enabled" switch toggled by the
//!   start/stop commands. It is not persisted.

use crate::config::{SyncConfig, TargetFolder};
use crate::error::Result;
use crate::rules::{PatternError, RuleSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// A loaded `sync.json` with its include/exclude rules compiled.
#[derive(Debug)]
pub struct ConfigSnapshot {
    path: PathBuf,
    version: u64,
    config: SyncConfig,
    rules: Vec<RuleSet>,
}

impl ConfigSnapshot {
    fn new(path: PathBuf, version: u64, config: SyncConfig) -> Self {
        let rules = config
            .target_folders
            .iter()
            .map(|t| RuleSet::compile(&t.include, &t.exclude))
            .collect();
        Self {
            path,
            version,
            config,
            rules,
        }
    }

    /// Path of the `sync.json` this snapshot was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the `sync.json`; the source root of targets that do
    /// not copy from the workspace.
    pub fn config_dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new(""))
    }

    /// Monotonic load counter; every successful load gets a higher number.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Targets paired with their compiled rules, in configuration order.
    pub fn targets(&self) -> impl Iterator<Item = (&TargetFolder, &RuleSet)> {
        self.config.target_folders.iter().zip(self.rules.iter())
    }

    /// Malformed patterns across all targets, tagged with the target index.
    pub fn pattern_errors(&self) -> impl Iterator<Item = (usize, &PatternError)> {
        self.rules
            .iter()
            .enumerate()
            .flat_map(|(i, rules)| rules.errors().iter().map(move |e| (i, e)))
    }
}

/// Holder of the current configuration snapshot.
#[derive(Debug, Default)]
pub struct ConfigStore {
    current: RwLock<Option<Arc<ConfigSnapshot>>>,
    versions: AtomicU64,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot, if any configuration has been loaded.
    pub fn current(&self) -> Option<Arc<ConfigSnapshot>> {
        self.current
            .read()
            .unwrap_or_else(|poison| poison.into_inner())
            .clone()
    }

    /// The current snapshot if it was loaded from `path`.
    pub fn current_for(&self, path: &Path) -> Option<Arc<ConfigSnapshot>> {
        self.current().filter(|snapshot| snapshot.path() == path)
    }

    /// Read and parse `path`, then replace the current snapshot.
    ///
    /// On failure the current snapshot is left untouched.
    pub fn load(&self, path: &Path) -> Result<Arc<ConfigSnapshot>> {
        let config = SyncConfig::load(path)?;
        Ok(self.replace(path, config))
    }

    /// Install `config` as the snapshot for `path`.
    ///
    /// The version is assigned under the write lock, so the installed
    /// snapshot always carries the highest version handed out.
    pub fn replace(&self, path: &Path, config: SyncConfig) -> Arc<ConfigSnapshot> {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(|poison| poison.into_inner());

        let version = self.versions.fetch_add(1, Ordering::SeqCst) + 1;
        let snapshot = Arc::new(ConfigSnapshot::new(path.to_path_buf(), version, config));
        *current = Some(Arc::clone(&snapshot));
        drop(current);

        tracing::debug!(path = %path.display(), version, "sync configuration installed");
        snapshot
    }
}

/// Global on/off switch for syncing.
#[derive(Debug)]
pub struct SyncLatch {
    enabled: AtomicBool,
}

impl Default for SyncLatch {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SyncLatch {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
        }
    }

    pub fn start(&self) {
        self.enabled.store(true, Ordering::SeqCst);
    }

    pub fn stop(&self) {
        self.enabled.store(false, Ordering::SeqCst);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}
