//! Fact lookup: the Wikimedia "on this day" feed with a local fallback
//!
//! # Error Handling Strategy
//!
//! Lookups never fail from the caller's point of view. Transport errors, non-success
//! statuses, malformed bodies and empty event lists are logged and replaced by
//! [`fallback::fallback_fact`], so the UI always has a sentence to show.

pub mod deserializers;
pub mod fallback;
pub mod fetcher;

pub use fallback::{curated_fact, fallback_fact};
pub use fetcher::{FeedSource, OfflineFeed, WikimediaFeed, fetch_fact, format_event};
