//! Output formats and console rendering for CLI commands.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{Note, Timestamp};

/// Maximum number of characters of a body shown in list output.
const BODY_PREVIEW_LEN: usize = 100;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Prints `data` as `{"data": ...}`.
pub fn print_json<T: Serialize>(data: T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&Output::new(data))?);
    Ok(())
}

/// Formats a timestamp for display, e.g. `Dec 02, 2024 14:30` (UTC).
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.as_datetime().format("%b %d, %Y %H:%M").to_string()
}

/// Truncates to at most `max_len` characters, ending in `...` when cut.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Renders a list of notes as human-readable blocks with a total line.
pub fn render_note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found.\n".to_string();
    }

    let mut out = String::from("\nNotes:\n\n");
    for note in notes {
        out.push_str(&format!("ID: {}\n", note.id));
        out.push_str(&format!("Title: {}\n", note.title));
        out.push_str(&format!("Body: {}\n", truncate(&note.body, BODY_PREVIEW_LEN)));
        out.push_str(&format!("Created: {}\n", format_timestamp(&note.created_at)));
        if !note.tags.is_empty() {
            out.push_str(&format!("Tags: [{}]\n", note.tags.join(", ")));
        }
        out.push('\n');
    }
    out.push_str(&format!("Total: {} note(s)\n", notes.len()));
    out
}

/// Renders a single note with its full body.
pub fn render_note(note: &Note) -> String {
    let mut out = String::new();
    out.push_str(&format!("\nID: {}\n", note.id));
    out.push_str(&format!("Title: {}\n\n", note.title));
    out.push_str(&format!("{}\n\n", note.body));
    out.push_str(&format!("Created: {}\n", format_timestamp(&note.created_at)));
    out.push_str(&format!("Updated: {}\n", format_timestamp(&note.updated_at)));
    if !note.tags.is_empty() {
        out.push_str(&format!("Tags: {}\n", note.tags.join(", ")));
    }
    out
}
