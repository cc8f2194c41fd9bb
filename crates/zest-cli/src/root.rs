use std::path::{Path, PathBuf};
use zest_core::paths;

/// Markers that identify a project root, strongest first.
const MARKERS: &[&str] = &[paths::ZEST_DIR, paths::SPECS_DIR, ".git"];

/// Resolve the project root directory.
///
/// Priority:
/// 1. `--root` flag / `ZEST_DEV_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `.zest-dev/`, then `specs/`, then `.git/`
/// 3. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_from(&cwd)
}

fn resolve_from(start: &Path) -> PathBuf {
    for marker in MARKERS {
        if let Some(dir) = find_upward(start, marker) {
            return dir;
        }
    }
    start.to_path_buf()
}

fn find_upward(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_dir())
        .map(Path::to_path_buf)
}
