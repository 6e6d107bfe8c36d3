//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// notes - a simple command-line note-taking tool
#[derive(Parser, Debug)]
#[command(name = "notes", version, about, long_about = None)]
pub struct Cli {
    /// Notes file (overrides NOTES_FILE and the config file)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note
    Add(AddArgs),

    /// List notes (most recent first), optionally filtered by tags
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View a single note by ID
    #[command(visible_alias = "show")]
    View(ViewArgs),

    /// Search notes by title or body
    Search(SearchArgs),

    /// Update a note's title, body, or tags
    #[command(visible_alias = "edit")]
    Update(UpdateArgs),

    /// Delete a note by ID
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),

    /// List all tags in use
    Tags(TagsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note title
    #[arg(short, long)]
    pub title: String,

    /// Note body
    #[arg(short, long, default_value = "")]
    pub body: String,

    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
}

/// Arguments for the `list` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only show notes with this tag (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `view` command
#[derive(Parser, Debug)]
pub struct ViewArgs {
    /// Note ID
    pub id: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Text to look for in titles and bodies (case-insensitive)
    pub query: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `update` command
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Note ID
    pub id: String,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New body
    #[arg(short, long)]
    pub body: Option<String>,

    /// New comma-separated tags (replaces existing tags)
    #[arg(long)]
    pub tags: Option<String>,
}

/// Arguments for the `delete` command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Note ID
    pub id: String,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
