//! Test fixtures for integration tests.
//!
//! Provides helpers for:
//! - Driving a Model with key presses
//! - Writing temporary config files

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;

use folio::config::Config;
use folio::tea::{update, Command, LogEntry, Message, Model};

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

/// A model without the boot sequence, driven one key at a time.
pub struct TestShell {
    pub model: Model,
}

impl TestShell {
    pub fn new() -> Self {
        Self::with_config(Config {
            skip_boot: true,
            ..Config::default()
        })
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            model: Model::new(config),
        }
    }

    pub fn press(&mut self, code: KeyCode) -> Vec<Command> {
        update(&mut self.model, Message::Key(key(code)))
    }

    /// Type `line` and press Enter; returns the commands from every key.
    pub fn run(&mut self, line: &str) -> Vec<Command> {
        let mut cmds = Vec::new();
        for c in line.chars() {
            cmds.extend(self.press(KeyCode::Char(c)));
        }
        cmds.extend(self.press(KeyCode::Enter));
        cmds
    }

    /// Log entries appended after the echo of the most recent command.
    pub fn last_output(&self) -> Vec<&LogEntry> {
        let start = self
            .model
            .log
            .iter()
            .rposition(|e| e.stamp.is_some())
            .map(|i| i + 1)
            .unwrap_or(0);
        self.model.log[start..].iter().collect()
    }

    pub fn last_texts(&self) -> Vec<&str> {
        self.last_output().iter().map(|e| e.text.as_str()).collect()
    }
}

/// A config file in a temporary directory.
pub struct TestConfig {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestConfig {
    pub fn new(contents: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("folio.toml");
        std::fs::write(&path, contents).expect("Failed to write config");
        Self { temp_dir, path }
    }

    pub fn load(&self) -> folio::Result<Config> {
        Config::load_from(&self.path)
    }
}
