//! On This Day - historical facts for any day of the year
//!
//! This library looks up a fact for a `DD/MM` date from the Wikimedia "on this day"
//! feed and keeps a short history of lookups. It provides:
//!
//! - Date validation against a fixed non-leap month table
//! - A feed client that never fails: errors and empty results fall back to a
//!   curated table or a generic sentence
//! - A persisted history of the ten most recent lookups
//! - An interactive terminal screen and one-shot CLI commands
//!
//! # Example
//!
//! ```
//! use on_this_day::facts::{OfflineFeed, fetch_fact};
//! use on_this_day::models::DayMonth;
//!
//! let date: DayMonth = "25/12".parse()?;
//! let fact = fetch_fact(&OfflineFeed, date, &mut rand::rng());
//! assert!(fact.contains("Christmas"));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod facts;
pub mod history_storage;
pub mod logging;
pub mod models;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use facts::{fallback_fact, fetch_fact};
pub use history_storage::HistoryStore;
pub use models::{DayMonth, HistoryItem};
pub use utils::{is_valid_date, random_date};
