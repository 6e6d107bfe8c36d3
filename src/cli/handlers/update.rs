//! Update command handler.

use anyhow::{Context, Result, bail};

use super::parse_tags;
use crate::cli::UpdateArgs;
use crate::domain::NoteUpdate;
use crate::manager::NoteManager;
use crate::storage::NoteStore;

/// Builds the partial update for `update`.
///
/// An empty flag value counts as "not provided", so `--title ""` leaves the
/// title alone. The manager itself accepts empty strings; this is purely a
/// command line convention.
pub fn build_update(args: &UpdateArgs) -> NoteUpdate {
    let non_empty = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());

    NoteUpdate {
        title: non_empty(&args.title),
        body: non_empty(&args.body),
        tags: non_empty(&args.tags).map(|t| parse_tags(Some(t.as_str()))),
    }
}

pub fn handle_update<S: NoteStore>(args: &UpdateArgs, manager: &NoteManager<S>) -> Result<()> {
    let update = build_update(args);
    if update.is_empty() {
        bail!("nothing to update: provide --title, --body, or --tags");
    }

    let Some(note) = manager
        .update_note(&args.id, update)
        .with_context(|| "failed to update note")?
    else {
        bail!("note with ID \"{}\" not found", args.id);
    };

    println!("✓ Note updated: {}", note.id);
    Ok(())
}
