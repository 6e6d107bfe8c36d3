//! Persistence for the notes document.
//!
//! Every operation is a full snapshot cycle: read the whole document, change
//! it in memory, write the whole document back. Nothing is cached between
//! calls, so two overlapping cycles (two processes, or two storages pointed
//! at the same file) can lose an update. Callers that need multi-process
//! safety must lock externally.

mod json;

pub use json::NoteStorage;

use crate::domain::Note;
use crate::infra::FsError;
use std::path::PathBuf;
use thiserror::Error;

/// Broad category of a storage failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorKind {
    /// Reading, writing or creating the file failed.
    IoFailure,
    /// The file content is not a valid notes document.
    InvalidFormat,
}

/// Errors that can occur while loading or saving the notes document.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access notes file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid notes file {path}: {source}")]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    pub fn kind(&self) -> StorageErrorKind {
        match self {
            StorageError::Io { .. } => StorageErrorKind::IoFailure,
            StorageError::InvalidFormat { .. } => StorageErrorKind::InvalidFormat,
        }
    }
}

impl From<FsError> for StorageError {
    fn from(err: FsError) -> Self {
        StorageError::Io {
            path: err.path().to_path_buf(),
            source: err.into_io(),
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Record-level access to the persisted notes.
///
/// "Not found" is reported through the `bool` results, never as an error.
pub trait NoteStore {
    /// Returns every note in storage order.
    fn get_all_notes(&self) -> StorageResult<Vec<Note>>;

    /// Appends a note to the end of the collection.
    fn add_note(&self, note: &Note) -> StorageResult<()>;

    /// Replaces the note with the given id in place.
    ///
    /// Returns `false` without writing if no note has that id.
    fn update_note(&self, id: &str, note: &Note) -> StorageResult<bool>;

    /// Removes the note with the given id.
    ///
    /// Returns `false` without writing if no note has that id.
    fn delete_note(&self, id: &str) -> StorageResult<bool>;
}
