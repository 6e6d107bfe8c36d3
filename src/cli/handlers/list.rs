//! List command handler.

use anyhow::{Context, Result};

use crate::cli::ListArgs;
use crate::cli::output::{OutputFormat, print_json, render_note_list};
use crate::domain::Note;
use crate::manager::NoteManager;
use crate::storage::NoteStore;

/// Returns the notes for `list`: all of them, or only those carrying every
/// requested tag.
pub fn list_notes<S: NoteStore>(args: &ListArgs, manager: &NoteManager<S>) -> Result<Vec<Note>> {
    if args.tags.is_empty() {
        manager.list_notes().with_context(|| "failed to list notes")
    } else {
        manager
            .filter_notes_by_tags(&args.tags)
            .with_context(|| format!("failed to filter notes by tags: {}", args.tags.join(", ")))
    }
}

pub fn handle_list<S: NoteStore>(args: &ListArgs, manager: &NoteManager<S>) -> Result<()> {
    let notes = list_notes(args, manager)?;

    match args.format {
        OutputFormat::Human => print!("{}", render_note_list(&notes)),
        OutputFormat::Json => print_json(&notes)?,
    }

    Ok(())
}
