//! Isolated test environment with temp directory.

// Allow dead code since not every test file uses every helper
#![allow(dead_code)]

use super::NotesCommand;
use notes::domain::{CreateNote, Note};
use notes::manager::NoteManager;
use notes::storage::{NoteStorage, NoteStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes file.
///
/// The notes file lives in a subdirectory that does not exist until the
/// first command touches it, so directory creation is exercised too.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
    notes_file: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        let notes_file = root.join(".notes").join("notes.json");
        Self {
            _temp_dir: temp_dir,
            root,
            notes_file,
        }
    }

    /// Returns the temp directory root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the notes file.
    pub fn notes_file(&self) -> &Path {
        &self.notes_file
    }

    /// Returns a manager over this environment's notes file.
    pub fn manager(&self) -> NoteManager<NoteStorage> {
        NoteManager::new(NoteStorage::new(&self.notes_file))
    }

    /// Creates a note directly through the library.
    pub fn add_note(&self, title: &str, body: &str, tags: &[&str]) -> Note {
        self.manager()
            .create_note(CreateNote::new(title, body).tags(tags.iter().copied()))
            .expect("Failed to create test note")
    }

    /// Reads the stored notes in storage order.
    pub fn stored_notes(&self) -> Vec<Note> {
        NoteStorage::new(&self.notes_file)
            .get_all_notes()
            .expect("Failed to read notes file")
    }

    /// Creates a NotesCommand configured for this test environment.
    pub fn cmd(&self) -> NotesCommand {
        NotesCommand::new()
            .config_home(&self.root.join("config"))
            .file(&self.notes_file)
    }

    /// Overwrites the notes file with raw content.
    pub fn write_notes_file(&self, content: &str) {
        std::fs::create_dir_all(self.notes_file.parent().expect("notes file has a parent"))
            .expect("Failed to create notes directory");
        std::fs::write(&self.notes_file, content).expect("Failed to write notes file");
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_starts_without_notes_file() {
        let env = TestEnv::new();
        assert!(env.root().exists());
        assert!(!env.notes_file().exists());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_add_note_persists() {
        let env = TestEnv::new();
        let note = env.add_note("Harness Note", "", &["a"]);
        assert_eq!(env.stored_notes(), vec![note]);
    }
}
