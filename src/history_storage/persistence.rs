//! History persistence: load/save with atomic writes

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::HistoryItem;

pub const HISTORY_FILENAME: &str = "history.json";

/// Reads and writes the history file
///
/// The store keeps the sequence exactly as given: capping and ordering are the
/// caller's job (see [`crate::models::append_capped`]).
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data_dir>/history.json`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(HISTORY_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored history, oldest first
    /// Returns an empty list if the file is missing; unreadable or corrupt content is an error
    pub fn load(&self) -> Result<Vec<HistoryItem>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read history file: {}", self.path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse history file: {}", self.path.display()))
    }

    /// Overwrite the stored history atomically (temp file + rename)
    pub fn save(&self, history: &[HistoryItem]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).context("Failed to create history directory")?;
        }

        let temp = self.path.with_extension("json.tmp");
        let json = serde_json::to_string(history).context("Failed to serialize history")?;
        fs::write(&temp, json).context("Failed to write history temp file")?;
        fs::rename(&temp, &self.path).context("Failed to rename history temp file")?;

        Ok(())
    }

    /// Remove the stored history; a missing file is not an error
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to remove history file: {}", self.path.display())),
        }
    }
}
