//! Search command handler.

use anyhow::{Context, Result};

use crate::cli::SearchArgs;
use crate::cli::output::{OutputFormat, print_json, render_note_list};
use crate::manager::NoteManager;
use crate::storage::NoteStore;

pub fn handle_search<S: NoteStore>(args: &SearchArgs, manager: &NoteManager<S>) -> Result<()> {
    let notes = manager
        .search_notes(&args.query)
        .with_context(|| format!("search failed for query: {}", args.query))?;

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes found matching \"{}\"", args.query);
            } else {
                println!("Found {} note(s) matching \"{}\"", notes.len(), args.query);
                print!("{}", render_note_list(&notes));
            }
        }
        OutputFormat::Json => print_json(&notes)?,
    }

    Ok(())
}
