//! Command handlers for the CLI.
//!
//! Each handler turns parsed arguments into one `NoteManager` call and
//! prints the result. Policy that only concerns the command line (tag
//! string parsing, treating empty flags as omitted) lives here, not in the
//! manager.

mod add;
mod delete;
mod list;
mod search;
mod tags;
mod update;
mod view;


// Re-export public items
pub use add::{add_note, handle_add};
pub use delete::handle_delete;
pub use list::{handle_list, list_notes};
pub use search::handle_search;
pub use tags::handle_tags;
pub use update::{build_update, handle_update};
pub use view::handle_view;

// ===========================================
// Shared Utilities
// ===========================================

/// Parses a comma-separated tag list.
///
/// Each tag is trimmed; empty entries are dropped. `None` gives no tags.
pub fn parse_tags(tags: Option<&str>) -> Vec<String> {
    tags.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}
