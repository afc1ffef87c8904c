use serde::{Deserialize, Serialize};

/// Number of lookups kept in the history
pub const MAX_HISTORY_ITEMS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Looked-up date in `DD/MM` form
    pub date: String,
    pub fact: String,
}

impl HistoryItem {
    pub fn new(date: impl Into<String>, fact: impl Into<String>) -> Self {
        Self { date: date.into(), fact: fact.into() }
    }
}

/// Append an item, dropping the oldest entries so at most [`MAX_HISTORY_ITEMS`] remain
pub fn append_capped(history: &mut Vec<HistoryItem>, item: HistoryItem) {
    history.push(item);
    if history.len() > MAX_HISTORY_ITEMS {
        let excess = history.len() - MAX_HISTORY_ITEMS;
        history.drain(..excess);
    }
}
