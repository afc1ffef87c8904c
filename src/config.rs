//! User configuration stored as `config.toml` in the data directory

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "https://api.wikimedia.org";
const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Wikipedia language edition used for the feed
    pub language: String,
    pub base_url: String,
    pub timeout_secs: u64,
    /// Skip the network and use only the fallback table
    pub offline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            offline: false,
        }
    }
}

impl Config {
    /// Load `config.toml` from `data_dir`; a missing file yields defaults
    pub fn load(data_dir: &Path) -> Result<Self> {
        Self::load_from(&data_dir.join(CONFIG_FILENAME))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}
