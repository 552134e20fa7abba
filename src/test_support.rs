use crate::config::CONFIG_FILE_NAME;
use crate::notifier::RecordingNotifier;
use crate::sync::SyncSession;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// An editor root at `<tmp>/ws`, leaving room for sibling destinations such as
/// `<tmp>/backup`.
pub(crate) struct TestWorkspace {
    _temp: TempDir,
    pub(crate) outer: PathBuf,
    pub(crate) root: PathBuf,
}

impl TestWorkspace {
    /// Write a file under the editor root, creating parent directories.
    pub(crate) fn write(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Write a `sync.json` into `dir` (relative to the editor root; "" for the root).
    pub(crate) fn write_config(&self, dir: &str, json: &str) -> PathBuf {
        let relative = if dir.is_empty() {
            CONFIG_FILE_NAME.to_string()
        } else {
            format!("{}/{}", dir, CONFIG_FILE_NAME)
        };
        self.write(&relative, json)
    }

    /// Path outside the editor root but inside the temp dir.
    pub(crate) fn outside(&self, relative: &str) -> PathBuf {
        self.outer.join(relative)
    }
}

pub(crate) fn create_workspace() -> TestWorkspace {
    let temp = TempDir::new().unwrap();
    let outer = temp.path().to_path_buf();
    let root = outer.join("ws");
    std::fs::create_dir_all(&root).unwrap();
    TestWorkspace {
        _temp: temp,
        outer,
        root,
    }
}

pub(crate) fn create_session() -> (SyncSession, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let session = SyncSession::new(notifier.clone());
    (session, notifier)
}
