//! Persistent lookup history
//!
//! The history is a JSON array of `{date, fact}` objects, oldest first, kept in
//! `history.json` inside the data directory:
//! - macOS: `~/Library/Application Support/on-this-day/`
//! - Linux: `~/.local/share/on-this-day/`
//! - Windows: `%APPDATA%\on-this-day\`

pub mod persistence;

pub use persistence::{HISTORY_FILENAME, HistoryStore};
