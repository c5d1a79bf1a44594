//! Locked write primitives backing the store operations

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::Deserialize;
use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Durability settings for writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RobustnessConfig {
    /// Flush written data to disk before returning.
    pub enable_fsync: bool,
    /// Overwrite through a temp file and rename instead of truncating in place.
    pub atomic_overwrite: bool,
}

impl Default for RobustnessConfig {
    fn default() -> Self {
        Self {
            enable_fsync: true,
            atomic_overwrite: true,
        }
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))
        }
        _ => Ok(()),
    }
}

fn lock(file: &File, path: &Path) -> Result<()> {
    file.lock_exclusive().map_err(|source| Error::LockFailed {
        path: path.to_path_buf(),
        source,
    })
}

fn unlock(file: &File, path: &Path) -> Result<()> {
    FileExt::unlock(file).map_err(|source| Error::LockFailed {
        path: path.to_path_buf(),
        source,
    })
}

fn write_locked(file: &mut File, path: &Path, content: &[u8], config: RobustnessConfig) -> Result<()> {
    lock(file, path)?;

    file.write_all(content).map_err(|e| Error::io(path, e))?;
    if config.enable_fsync {
        file.sync_all().map_err(|e| Error::io(path, e))?;
    }

    unlock(file, path)
}

/// The file a write to `path` must land in: the link target for symlinks.
fn real_target(path: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).map_err(|e| Error::io(path, e))
        }
        _ => Ok(path.to_path_buf()),
    }
}

/// Write content atomically to a file with locking.
///
/// Symlinks are followed, so the link stays a link and its target receives
/// the content. The existing target is locked for the duration of the write
/// and its permissions carry over to the replacement. Content goes to a
/// uniquely named temp file in the same directory, which is then renamed
/// over the target; on failure the temp file is removed and the target is
/// untouched.
pub fn write_atomic(path: &Path, content: &[u8], config: RobustnessConfig) -> Result<()> {
    let target = real_target(path)?;
    ensure_parent(&target)?;

    let guard = match OpenOptions::new().write(true).open(&target) {
        Ok(file) => {
            lock(&file, &target)?;
            Some(file)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(Error::io(&target, e)),
    };
    let permissions = match &guard {
        Some(file) => Some(
            file.metadata()
                .map_err(|e| Error::io(&target, e))?
                .permissions(),
        ),
        None => None,
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    temp.write_all(content)
        .map_err(|e| Error::io(temp.path(), e))?;
    if let Some(permissions) = permissions {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(|e| Error::io(temp.path(), e))?;
    }
    if config.enable_fsync {
        temp.as_file()
            .sync_all()
            .map_err(|e| Error::io(temp.path(), e))?;
    }

    temp.persist(&target)
        .map_err(|e| Error::io(&target, e.error))?;

    match guard {
        Some(file) => unlock(&file, &target),
        None => Ok(()),
    }
}

/// Truncate and rewrite a file in place.
pub fn write_in_place(path: &Path, content: &[u8], config: RobustnessConfig) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;
    write_locked(&mut file, path, content, config)
}

/// Append content to an existing file.
///
/// Never creates the file: a missing target is an I/O error.
pub fn append(path: &Path, content: &[u8], config: RobustnessConfig) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;
    write_locked(&mut file, path, content, config)
}

/// Create a new file, creating missing parent directories.
///
/// Fails with [`Error::AlreadyExists`] if anything already occupies `path`.
pub fn create_new(path: &Path, content: &[u8], config: RobustnessConfig) -> Result<()> {
    ensure_parent(path)?;

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::AlreadyExists => Error::AlreadyExists { path: path.to_path_buf() },
            _ => Error::io(path, e),
        })?;

    let result = write_locked(&mut file, path, content, config);
    if result.is_err() {
        drop(file);
        let _ = fs::remove_file(path);
    }
    result
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
