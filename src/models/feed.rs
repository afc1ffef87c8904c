use serde::{Deserialize, Serialize};

/// Body of `GET .../onthisday/events/{month}/{day}`
///
/// Only the `events` list is used; the feed's other sections are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub events: Vec<FeedEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEvent {
    #[serde(deserialize_with = "crate::facts::deserializers::deserialize_year")]
    pub year: i64,
    pub text: String,
}

impl FeedEvent {
    pub fn new(year: i64, text: impl Into<String>) -> Self {
        Self { year, text: text.into() }
    }
}
