//! View command handler.

use anyhow::{Context, Result, bail};

use crate::cli::ViewArgs;
use crate::cli::output::{OutputFormat, print_json, render_note};
use crate::manager::NoteManager;
use crate::storage::NoteStore;

pub fn handle_view<S: NoteStore>(args: &ViewArgs, manager: &NoteManager<S>) -> Result<()> {
    let Some(note) = manager
        .get_note(&args.id)
        .with_context(|| "failed to view note")?
    else {
        bail!("note with ID \"{}\" not found", args.id);
    };

    match args.format {
        OutputFormat::Human => print!("{}", render_note(&note)),
        OutputFormat::Json => print_json(&note)?,
    }

    Ok(())
}
