//! Data models for "on this day" lookups.
//!
//! - [`DayMonth`] - A validated calendar day without a year
//! - [`HistoryItem`] - One completed lookup as stored in the history file
//! - [`FeedResponse`] / [`FeedEvent`] - Body of the Wikimedia "on this day" events feed

pub mod day_month;
pub mod feed;
pub mod history;

pub use day_month::DayMonth;
pub use feed::{FeedEvent, FeedResponse};
pub use history::{HistoryItem, MAX_HISTORY_ITEMS, append_capped};
