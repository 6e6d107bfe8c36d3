//! Note lifecycle policy on top of a [`NoteStore`].
//!
//! The manager owns id generation, timestamps, ordering, search and tag
//! filtering. It keeps no state of its own: every call takes a fresh
//! snapshot from the store, computes on it, and writes back through the
//! store when something changed. Storage errors pass through untouched.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::domain::{CreateNote, Note, NoteId, NoteUpdate, Timestamp};
use crate::storage::{NoteStore, StorageResult};

/// Note operations exposed to the command line layer.
#[derive(Debug, Clone)]
pub struct NoteManager<S> {
    store: S,
}

impl<S: NoteStore> NoteManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    /// Creates and persists a note.
    ///
    /// The clock is read once so `created_at == updated_at`.
    pub fn create_note(&self, options: CreateNote) -> StorageResult<Note> {
        let now = Timestamp::now();
        let note = Note {
            id: NoteId::generate(),
            title: options.title,
            body: options.body,
            created_at: now,
            updated_at: now,
            tags: options.tags.unwrap_or_default(),
        };

        self.store.add_note(&note)?;
        info!(id = %note.id, "created note");
        Ok(note)
    }

    /// Returns all notes, most recently created first.
    pub fn list_notes(&self) -> StorageResult<Vec<Note>> {
        let mut notes = self.store.get_all_notes()?;
        sort_newest_first(&mut notes);
        Ok(notes)
    }

    /// Looks up a note by id. A missing note is `Ok(None)`.
    pub fn get_note(&self, id: &str) -> StorageResult<Option<Note>> {
        let notes = self.store.get_all_notes()?;
        Ok(notes.into_iter().find(|n| n.id == *id))
    }

    /// Case-insensitive substring search over title and body.
    ///
    /// An empty query matches every note.
    pub fn search_notes(&self, query: &str) -> StorageResult<Vec<Note>> {
        let query = query.to_lowercase();
        let mut notes: Vec<Note> = self
            .store
            .get_all_notes()?
            .into_iter()
            .filter(|n| n.matches_query(&query))
            .collect();

        sort_newest_first(&mut notes);
        debug!(query = %query, matches = notes.len(), "searched notes");
        Ok(notes)
    }

    /// Applies a partial update to an existing note.
    ///
    /// Returns `Ok(None)` without writing if the note does not exist, or if
    /// the store reports that it could not find the note to replace.
    pub fn update_note(&self, id: &str, updates: NoteUpdate) -> StorageResult<Option<Note>> {
        let Some(current) = self.get_note(id)? else {
            return Ok(None);
        };

        let updated = current.apply(updates, Timestamp::now());
        if !self.store.update_note(id, &updated)? {
            return Ok(None);
        }

        info!(id = %updated.id, "updated note");
        Ok(Some(updated))
    }

    /// Deletes a note. Returns whether a note was removed.
    pub fn delete_note(&self, id: &str) -> StorageResult<bool> {
        let deleted = self.store.delete_note(id)?;
        if deleted {
            info!(id, "deleted note");
        }
        Ok(deleted)
    }

    /// Returns notes carrying every tag in `tags`, most recent first.
    ///
    /// Tags match exactly. An empty filter returns every note.
    pub fn filter_notes_by_tags(&self, tags: &[String]) -> StorageResult<Vec<Note>> {
        if tags.is_empty() {
            return self.list_notes();
        }

        let mut notes: Vec<Note> = self
            .store
            .get_all_notes()?
            .into_iter()
            .filter(|n| n.has_all_tags(tags))
            .collect();

        sort_newest_first(&mut notes);
        Ok(notes)
    }

    /// Returns every distinct tag in use, sorted ascending.
    pub fn get_all_tags(&self) -> StorageResult<Vec<String>> {
        let notes = self.store.get_all_notes()?;
        let tags: BTreeSet<String> = notes.into_iter().flat_map(|n| n.tags).collect();
        Ok(tags.into_iter().collect())
    }
}

/// Stable sort by creation time, newest first.
fn sort_newest_first(notes: &mut [Note]) {
    notes.sort_by_key(|n| std::cmp::Reverse(n.created_at));
}
