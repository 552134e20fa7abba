//! Lexical path helpers.
//!
//! Destination roots in `sync.json` are resolved against a source root the way
//! a shell would resolve `cd`: `.` components are dropped and `..` pops the
//! previous component. No filesystem access happens, so a destination that does
//! not exist yet still resolves.

use std::path::{Component, Path, PathBuf};

/// Resolve `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    out.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

/// Check whether `path` is `root` or lies underneath it, component-wise.
///
/// `/ws2/file` is not within `/ws`, unlike a plain string prefix test.
pub fn is_within(path: &Path, root: &Path) -> bool {
    normalize_lexically(path).starts_with(normalize_lexically(root))
}

/// Compute `path` relative to `root`, or `None` if `path` is outside `root`.
pub fn relative_to(path: &Path, root: &Path) -> Option<PathBuf> {
    normalize_lexically(path)
        .strip_prefix(normalize_lexically(root))
        .ok()
        .map(Path::to_path_buf)
}

/// Render a relative path with `/` separators for glob matching.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
