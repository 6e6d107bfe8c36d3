//! JSON file backend.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{NoteStore, StorageError, StorageResult};
use crate::domain::{Note, NotesData};
use crate::infra::{ensure_parent_dir, write_atomic};

/// Stores the whole notes collection in one pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct NoteStorage {
    path: PathBuf,
}

impl NoteStorage {
    /// Creates a storage for the given file. Nothing is touched on disk
    /// until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the backing file (and its directories) with an empty
    /// document if it does not exist yet. Existing files are left alone.
    pub fn initialize(&self) -> StorageResult<()> {
        let exists = self.path.try_exists().map_err(|e| self.io_error(e))?;
        if exists {
            return Ok(());
        }

        debug!(path = %self.path.display(), "creating notes file");
        ensure_parent_dir(&self.path)?;
        self.save(&NotesData::default())
    }

    /// Reads and parses the whole document, initializing it first if needed.
    pub fn load(&self) -> StorageResult<NotesData> {
        self.initialize()?;

        let bytes = std::fs::read(&self.path).map_err(|e| self.io_error(e))?;
        let data: NotesData =
            serde_json::from_slice(&bytes).map_err(|e| StorageError::InvalidFormat {
                path: self.path.clone(),
                source: e,
            })?;

        debug!(path = %self.path.display(), notes = data.notes.len(), "loaded notes");
        Ok(data)
    }

    /// Serializes the document and publishes it atomically.
    pub fn save(&self, data: &NotesData) -> StorageResult<()> {
        let content =
            serde_json::to_string_pretty(data).map_err(|e| StorageError::InvalidFormat {
                path: self.path.clone(),
                source: e,
            })?;

        write_atomic(&self.path, content.as_bytes())?;

        debug!(path = %self.path.display(), notes = data.notes.len(), "saved notes");
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl NoteStore for NoteStorage {
    fn get_all_notes(&self) -> StorageResult<Vec<Note>> {
        Ok(self.load()?.notes)
    }

    fn add_note(&self, note: &Note) -> StorageResult<()> {
        let mut data = self.load()?;
        data.notes.push(note.clone());
        self.save(&data)
    }

    fn update_note(&self, id: &str, note: &Note) -> StorageResult<bool> {
        let mut data = self.load()?;
        let Some(slot) = data.notes.iter_mut().find(|n| n.id == *id) else {
            return Ok(false);
        };

        *slot = note.clone();
        self.save(&data)?;
        Ok(true)
    }

    fn delete_note(&self, id: &str) -> StorageResult<bool> {
        let mut data = self.load()?;
        let Some(index) = data.notes.iter().position(|n| n.id == *id) else {
            return Ok(false);
        };

        data.notes.remove(index);
        self.save(&data)?;
        Ok(true)
    }
}
