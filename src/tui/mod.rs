// TUI module for the interactive single-screen interface
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use std::sync::Arc;

use anyhow::Result;
pub use app::{App, Phase};
use terminal::TerminalManager;

use crate::facts::FeedSource;
use crate::history_storage::HistoryStore;

/// Run the interactive TUI until the user quits
pub fn run_interactive(
    source: Arc<dyn FeedSource>,
    store: HistoryStore,
    initial_input: String,
) -> Result<()> {
    let mut app = App::new(source, store, initial_input);

    let mut manager = TerminalManager::new()?;
    let res = app.run(manager.terminal_mut());
    manager.restore()?;

    res
}
