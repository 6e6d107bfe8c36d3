//! Delete command handler.

use anyhow::{Context, Result, bail};

use crate::cli::DeleteArgs;
use crate::manager::NoteManager;
use crate::storage::NoteStore;

pub fn handle_delete<S: NoteStore>(args: &DeleteArgs, manager: &NoteManager<S>) -> Result<()> {
    let deleted = manager
        .delete_note(&args.id)
        .with_context(|| "failed to delete note")?;

    if !deleted {
        bail!("note with ID \"{}\" not found", args.id);
    }

    println!("✓ Note deleted: {}", args.id);
    Ok(())
}
