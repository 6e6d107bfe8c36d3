//! Fluent wrapper around assert_cmd::Command.

// Each test binary that includes the harness uses a different subset of it
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `notes` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct NotesCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    config_home: Option<PathBuf>,
}

impl NotesCommand {
    /// Creates a new command for the `notes` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
            config_home: None,
        }
    }

    /// Sets the `--file` option to specify the notes file.
    pub fn file(mut self, path: &Path) -> Self {
        self.args.push("--file".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Points the config directory somewhere isolated.
    pub fn config_home(mut self, path: &Path) -> Self {
        self.config_home = Some(path.to_path_buf());
        self
    }

    /// Sets an environment variable for the child process.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("notes").expect("Failed to find notes binary");
        cmd.env_remove("NOTES_FILE").env_remove("RUST_LOG");
        if let Some(config_home) = &self.config_home {
            cmd.env("XDG_CONFIG_HOME", config_home);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `add` command.
    pub fn add(self, title: &str) -> Self {
        self.args(["add", "--title", title])
    }

    /// Configures for the `list` command.
    pub fn list(self) -> Self {
        self.args(["list"])
    }

    /// Configures for the `view` command with an ID.
    pub fn view(self, id: &str) -> Self {
        self.args(["view", id])
    }

    /// Configures for the `search` command with a query.
    pub fn search(self, query: &str) -> Self {
        self.args(["search", query])
    }

    /// Configures for the `update` command with an ID.
    pub fn update(self, id: &str) -> Self {
        self.args(["update", id])
    }

    /// Configures for the `delete` command with an ID.
    pub fn delete(self, id: &str) -> Self {
        self.args(["delete", id])
    }

    /// Configures for the `tags` command.
    pub fn tags(self) -> Self {
        self.args(["tags"])
    }

    // ===========================================
    // Options
    // ===========================================

    /// Adds `--body <body>`.
    pub fn with_body(self, body: &str) -> Self {
        self.args(["--body", body])
    }

    /// Adds `--tags <tags>`.
    pub fn with_tags(self, tags: &str) -> Self {
        self.args(["--tags", tags])
    }

    /// Adds `--tag <tag>` (list filter).
    pub fn with_tag(self, tag: &str) -> Self {
        self.args(["--tag", tag])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for NotesCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_runs_binary() {
        NotesCommand::new().args(["--help"]).assert().success();
    }
}
