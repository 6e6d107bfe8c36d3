//! notes - a local note-taking tool backed by a single JSON file

pub mod cli;
pub mod domain;
pub mod infra;
pub mod manager;
pub mod storage;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_delete, handle_list, handle_search, handle_tags, handle_update,
        handle_view,
    },
};
use manager::NoteManager;
use storage::NoteStorage;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        clap_complete::generate(args.shell, &mut Cli::command(), "notes", &mut std::io::stdout());
        return Ok(());
    }

    // An explicit --file makes the config file irrelevant.
    let config = match cli.file {
        Some(_) => Config::default(),
        None => Config::load()?,
    };
    let notes_file = config.notes_file(cli.file.as_ref());
    debug!(path = %notes_file.display(), "using notes file");

    let manager = NoteManager::new(NoteStorage::new(notes_file));

    match &cli.command {
        Command::Add(args) => handle_add(args, &manager),
        Command::List(args) => handle_list(args, &manager),
        Command::View(args) => handle_view(args, &manager),
        Command::Search(args) => handle_search(args, &manager),
        Command::Update(args) => handle_update(args, &manager),
        Command::Delete(args) => handle_delete(args, &manager),
        Command::Tags(args) => handle_tags(args, &manager),
        Command::Completions(_) => Ok(()),
    }
}

/// Installs a stderr logger. `RUST_LOG` wins; otherwise `-v` flags raise
/// the level from `warn`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A subscriber may already be installed when run() is embedded.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
