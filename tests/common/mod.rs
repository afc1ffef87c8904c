//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

use on_this_day::HistoryItem;
use tempfile::TempDir;

/// Builder for a temporary data directory (history + config)
pub struct DataDirBuilder {
    temp_dir: TempDir,
}

impl DataDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write raw content to history.json
    pub fn with_history_raw(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("history.json"), content)
            .expect("Failed to write history.json");
        self
    }

    pub fn with_history(self, items: &[HistoryItem]) -> Self {
        let json = serde_json::to_string(items).expect("Failed to serialize history");
        self.with_history_raw(&json)
    }

    pub fn with_config(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("config.toml"), content)
            .expect("Failed to write config.toml");
        self
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

/// Read back history.json from a data directory
pub fn read_history(data_dir: &Path) -> Vec<HistoryItem> {
    let json = fs::read_to_string(data_dir.join("history.json")).expect("history.json exists");
    serde_json::from_str(&json).expect("history.json is valid")
}

/// Command for the binary pointed at `data_dir`, offline
pub fn offline_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_on-this-day"));
    cmd.arg("--data-dir").arg(data_dir).arg("--offline").env_remove("ON_THIS_DAY_PATH");
    cmd
}

/// Ten or more numbered history items for a month
pub fn numbered_items(count: u8, month: u8) -> Vec<HistoryItem> {
    (1..=count)
        .map(|day| HistoryItem::new(format!("{:02}/{:02}", day, month), format!("fact {}", day)))
        .collect()
}
