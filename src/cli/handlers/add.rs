//! Add command handler.

use anyhow::{Context, Result};

use super::parse_tags;
use crate::cli::AddArgs;
use crate::domain::{CreateNote, Note};
use crate::manager::NoteManager;
use crate::storage::NoteStore;

/// Creates a note from the `add` arguments.
pub fn add_note<S: NoteStore>(args: &AddArgs, manager: &NoteManager<S>) -> Result<Note> {
    let options = CreateNote {
        title: args.title.clone(),
        body: args.body.clone(),
        tags: Some(parse_tags(args.tags.as_deref())),
    };

    manager
        .create_note(options)
        .with_context(|| "failed to create note")
}

pub fn handle_add<S: NoteStore>(args: &AddArgs, manager: &NoteManager<S>) -> Result<()> {
    let note = add_note(args, manager)?;
    println!("✓ Note created with ID: {}", note.id);
    Ok(())
}
