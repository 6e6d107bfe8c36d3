//! File I/O helpers with atomic writes.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors during file system operations.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path has no parent directory: {path}")]
    NoParent { path: PathBuf },
}

impl FsError {
    /// Returns the path the failed operation was acting on.
    pub fn path(&self) -> &Path {
        match self {
            FsError::Io { path, .. }
            | FsError::AtomicWrite { path, .. }
            | FsError::NoParent { path } => path,
        }
    }

    /// Converts into the underlying I/O error.
    pub fn into_io(self) -> io::Error {
        match self {
            FsError::Io { source, .. } | FsError::AtomicWrite { source, .. } => source,
            FsError::NoParent { path } => io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("path has no parent directory: {}", path.display()),
            ),
        }
    }
}

/// Returns the directory that holds `path`.
///
/// A bare file name (`notes.json`) resolves to the current directory.
pub fn parent_dir(path: &Path) -> Result<&Path, FsError> {
    match path.parent() {
        Some(p) if p.as_os_str().is_empty() => Ok(Path::new(".")),
        Some(p) => Ok(p),
        None => Err(FsError::NoParent { path: path.into() }),
    }
}

/// Creates the parent directory of `path` and all of its ancestors.
pub fn ensure_parent_dir(path: &Path) -> Result<(), FsError> {
    let parent = parent_dir(path)?;
    std::fs::create_dir_all(parent).map_err(|e| FsError::Io {
        path: parent.into(),
        source: e,
    })
}

/// Writes `contents` to `path` atomically.
///
/// The bytes go to a temporary file in the same directory, are flushed to
/// disk, and the temporary file is then renamed over `path`. Readers see
/// either the old content or the new content, never a mix. The parent
/// directory must exist.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), FsError> {
    let parent = parent_dir(path)?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::Io {
        path: path.into(),
        source: e,
    })?;

    temp.write_all(contents)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| FsError::Io {
            path: path.into(),
            source: e,
        })?;

    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}
