//! Opaque note identifier backed by random UUIDs.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use uuid::Uuid;

/// A unique identifier for notes.
///
/// Freshly generated ids are UUID v4 strings in canonical hyphenated form
/// (36 characters, lowercase hex). Ids read back from a notes file are
/// treated as opaque strings and are never re-validated, so hand-edited or
/// legacy ids keep working.
///
/// # Examples
///
/// ```
/// use notes::domain::NoteId;
///
/// let id = NoteId::generate();
/// assert_eq!(id.as_str().len(), 36);
///
/// let legacy = NoteId::from("1");
/// assert_eq!(legacy.as_str(), "1");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Generates a new random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for NoteId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Borrow<str> for NoteId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NoteId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}
