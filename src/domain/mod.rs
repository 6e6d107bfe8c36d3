//! Core types: Note, NotesData, NoteId (UUID), Timestamp

mod note;
mod note_id;
mod timestamp;

pub use note::{CreateNote, Note, NoteUpdate, NotesData};
pub use note_id::NoteId;
pub use timestamp::{ParseTimestampError, Timestamp};
