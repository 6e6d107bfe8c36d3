//! The persisted note record and the inputs used to create or change one.

use crate::domain::{NoteId, Timestamp};
use serde::{Deserialize, Serialize};

/// A single note as stored in the notes file.
///
/// `id` and `created_at` never change after creation. `updated_at` is reset
/// on every successful update. Tags keep their insertion order and are not
/// deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub body: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Note {
    /// Returns true if the note carries every tag in `tags` (exact match).
    pub fn has_all_tags(&self, tags: &[String]) -> bool {
        tags.iter().all(|tag| self.tags.contains(tag))
    }

    /// Case-insensitive substring match against title or body.
    ///
    /// `lowered_query` must already be lowercase.
    pub fn matches_query(&self, lowered_query: &str) -> bool {
        self.title.to_lowercase().contains(lowered_query)
            || self.body.to_lowercase().contains(lowered_query)
    }

    /// Applies a partial update, leaving omitted fields untouched.
    ///
    /// Identity and creation time are preserved; `updated_at` is set to `now`.
    pub fn apply(&self, update: NoteUpdate, now: Timestamp) -> Note {
        Note {
            id: self.id.clone(),
            title: update.title.unwrap_or_else(|| self.title.clone()),
            body: update.body.unwrap_or_else(|| self.body.clone()),
            created_at: self.created_at,
            updated_at: now,
            tags: update.tags.unwrap_or_else(|| self.tags.clone()),
        }
    }
}

/// The whole persisted document.
///
/// `notes` is in storage order (append order), which is not display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesData {
    pub notes: Vec<Note>,
}

/// Input for creating a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateNote {
    pub title: String,
    pub body: String,
    pub tags: Option<Vec<String>>,
}

impl CreateNote {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            tags: None,
        }
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

/// A partial update. `None` means "keep the current value"; an explicit
/// empty string or empty tag list is a real value and is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl NoteUpdate {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Returns true if no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none() && self.tags.is_none()
    }
}
