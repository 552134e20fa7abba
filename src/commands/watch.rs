//! Implementation of the `syncsave watch` command.
//!
//! `watch` is a polling save-event source for editors without an integration:
//! - every `interval_ms` it scans the editor root for files whose modification
//!   time changed (or that appeared) and delivers each as a save event
//! - files the engine itself wrote are recorded, so a destination inside the
//!   editor root is not mirrored again on the next scan
//! - stdin lines `stop`, `start`, `init` and `status` drive the session
//!
//! `.git` and `node_modules` directories are never scanned.

use super::console_session;
use super::save::describe_skip;
use crate::cli::WatchArgs;
use crate::context::EditorContext;
use crate::error::Result;
use crate::sync::{SaveOutcome, SyncSession};
use std::collections::HashMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, SystemTime};
use walkdir::WalkDir;

/// Directory names skipped while scanning.
const IGNORED_DIRS: &[&str] = &[".git", "node_modules"];

pub fn cmd_watch(args: WatchArgs) -> Result<()> {
    let ctx = EditorContext::resolve(args.root.root.as_deref())?;
    let session = Arc::new(console_session());
    let mut scanner = Scanner::new(&ctx.root);

    eprintln!("syncsave watch started");
    eprintln!("  root:     {}", ctx.root.display());

    if args.once {
        // A single pass treats every file as saved.
        deliver(&session, &ctx.root, &mut scanner);
        return Ok(());
    }

    eprintln!("  interval: {}ms", args.interval_ms);
    eprintln!("  commands: stop | start | init | status");
    eprintln!();

    scanner.scan();
    spawn_command_reader(Arc::clone(&session), ctx.root.clone());

    loop {
        thread::sleep(Duration::from_millis(args.interval_ms.max(50)));
        deliver(&session, &ctx.root, &mut scanner);
    }
}

fn deliver(session: &SyncSession, root: &Path, scanner: &mut Scanner) {
    for path in scanner.scan() {
        let outcome = session.on_file_saved(&path, root);
        if let SaveOutcome::Skipped(reason) = &outcome {
            tracing::debug!("{}", describe_skip(*reason, &path));
        }
        scanner.mark_written(&outcome.written_paths());
    }
}

fn spawn_command_reader(session: Arc<SyncSession>, root: PathBuf) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            run_command(&session, &root, line.trim());
        }
    });
}

fn run_command(session: &SyncSession, root: &Path, command: &str) {
    match command {
        "" => {}
        "stop" => {
            session.stop();
            eprintln!("Syncing stopped.");
        }
        "start" => {
            session.start();
            eprintln!("Syncing started.");
        }
        "init" => {
            // Load failures are reported by the session itself.
            if let Ok(path) = session.init_config(root) {
                eprintln!("Sync configuration: {}", path.display());
            }
        }
        "status" => {
            let state = if session.is_enabled() { "on" } else { "off" };
            match session.config().current() {
                Some(snapshot) => eprintln!(
                    "Syncing {}; configuration {} (version {})",
                    state,
                    snapshot.path().display(),
                    snapshot.version()
                ),
                None => eprintln!("Syncing {}; no configuration loaded", state),
            }
        }
        other => eprintln!("Unknown command '{}' (expected stop, start, init or status)", other),
    }
}

/// Tracks file modification times under a root to detect saves.
#[derive(Debug)]
struct Scanner {
    root: PathBuf,
    seen: HashMap<PathBuf, SystemTime>,
}

impl Scanner {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            seen: HashMap::new(),
        }
    }

    /// Files that are new or modified since the previous scan, in path order.
    /// The first scan reports every file.
    fn scan(&mut self) -> Vec<PathBuf> {
        let mut changed = Vec::new();
        let mut present = HashMap::with_capacity(self.seen.len());

        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_ignored_dir(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(modified) = entry.metadata().ok().and_then(|m| m.modified().ok()) else {
                continue;
            };

            let path = entry.into_path();
            if self.seen.get(&path) != Some(&modified) {
                changed.push(path.clone());
            }
            present.insert(path, modified);
        }

        self.seen = present;
        changed
    }

    /// Record the current modification time of files the engine wrote, so the
    /// next scan does not deliver them as saves.
    fn mark_written(&mut self, paths: &[PathBuf]) {
        for path in paths {
            if !path.starts_with(&self.root) {
                continue;
            }
            if let Ok(modified) = std::fs::metadata(path).and_then(|m| m.modified()) {
                self.seen.insert(path.clone(), modified);
            }
        }
    }
}

fn is_ignored_dir(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| IGNORED_DIRS.contains(&name))
}
