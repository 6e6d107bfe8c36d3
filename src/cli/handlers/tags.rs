//! Tags command handler.

use anyhow::{Context, Result};

use crate::cli::TagsArgs;
use crate::cli::output::{OutputFormat, print_json};
use crate::manager::NoteManager;
use crate::storage::NoteStore;

pub fn handle_tags<S: NoteStore>(args: &TagsArgs, manager: &NoteManager<S>) -> Result<()> {
    let tags = manager
        .get_all_tags()
        .with_context(|| "failed to list tags")?;

    match args.format {
        OutputFormat::Human => {
            if tags.is_empty() {
                println!("No tags found.");
            } else {
                for tag in &tags {
                    println!("{}", tag);
                }
            }
        }
        OutputFormat::Json => print_json(&tags)?,
    }

    Ok(())
}
