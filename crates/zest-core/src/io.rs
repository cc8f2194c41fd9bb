use crate::error::{Result, ZestError};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// A failed write never leaves a half-written spec or deployed file behind.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    ensure_dir(dir)?;
    let mut tmp = NamedTempFile::new_in(dir).map_err(ZestError::fs(dir))?;
    tmp.write_all(data).map_err(ZestError::fs(path))?;
    tmp.persist(path).map_err(|e| ZestError::Fs {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(ZestError::fs(path))
}

/// Read a UTF-8 file, reporting the path on failure.
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(ZestError::fs(path))
}

/// Write `data` only if the file content differs. Returns true if written.
pub fn write_if_changed(path: &Path, data: &[u8]) -> Result<bool> {
    if let Ok(existing) = std::fs::read(path) {
        if existing == data {
            return Ok(false);
        }
    }
    atomic_write(path, data)?;
    Ok(true)
}
