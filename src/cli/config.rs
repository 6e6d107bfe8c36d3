//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable that points at the notes file.
pub const NOTES_FILE_ENV: &str = "NOTES_FILE";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Path to the notes JSON file
    pub file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/notes/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notes")
            .join("config.toml")
    }

    /// Returns the default notes file: `~/.notes/notes.json`.
    pub fn default_notes_file() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".notes")
            .join("notes.json")
    }

    /// Resolve the notes file, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--file` argument
    /// 2. `NOTES_FILE` environment variable
    /// 3. Config file `file` setting
    /// 4. `~/.notes/notes.json`
    pub fn notes_file(&self, cli_file: Option<&PathBuf>) -> PathBuf {
        let env_file = std::env::var_os(NOTES_FILE_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self.resolve_notes_file(cli_file, env_file)
    }

    fn resolve_notes_file(&self, cli_file: Option<&PathBuf>, env_file: Option<PathBuf>) -> PathBuf {
        cli_file
            .cloned()
            .or(env_file)
            .or_else(|| self.file.clone())
            .map(|p| expand_tilde(&p))
            .unwrap_or_else(Self::default_notes_file)
    }
}

/// Expands a leading `~/` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
