//! TUI application state and event handling.
//!
//! The `App` owns all screen state and runs the main event loop via `run()`:
//!
//! - **Lookups**: Enter looks up the typed date, Ctrl+S picks a random one ("surprise me")
//! - **Phases**: `Idle -> Loading -> Displaying`; both lookup actions are ignored while loading
//! - **Worker thread**: the single outstanding fetch runs off the UI thread and reports
//!   back over a channel polled every tick, so the spinner keeps animating
//! - **History**: each completed lookup is appended (capped at ten) and saved
//! - **Status messages**: transient feedback for validation and clipboard results
//!
//! # Example
//!
//! ```rust,ignore
//! let store = HistoryStore::in_dir(&data_dir);
//! let mut app = App::new(Arc::new(OfflineFeed), store, "25/12".to_string());
//! app.run(&mut terminal)?;
//! ```

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::{debug, error, warn};

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_fact;
use crate::facts::{FeedSource, fetch_fact};
use crate::history_storage::HistoryStore;
use crate::models::{DayMonth, HistoryItem, append_capped};
use crate::utils::random_date;
use crate::utils::terminal::sanitize_fact;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Longest accepted input; valid dates are five characters
const MAX_INPUT_LEN: usize = 16;

pub const EMPTY_INPUT_MESSAGE: &str = "✗ Please enter a date in DD/MM format";
pub const INVALID_DATE_MESSAGE: &str = "✗ Invalid date: use DD/MM (e.g. 25/12)";

/// Lookup lifecycle of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing looked up yet
    Idle,
    /// A fetch is in flight; lookups are disabled
    Loading,
    /// Showing the result of the last lookup
    Displaying,
}

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Result sent back by the fetch worker
struct FetchOutcome {
    date: DayMonth,
    fact: String,
}

pub struct App {
    source: Arc<dyn FeedSource>,
    store: HistoryStore,
    phase: Phase,
    input: String,
    current: Option<HistoryItem>,
    // Oldest first, as stored
    history: Vec<HistoryItem>,
    // Index into the newest-first history view
    selected_idx: usize,
    pending: Option<Receiver<FetchOutcome>>,
    loading_since: Option<Instant>,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    /// Create the app and load the stored history; a history that cannot be read is
    /// logged and treated as empty. Stored text is sanitized since the file may be hand-edited
    pub fn new(source: Arc<dyn FeedSource>, store: HistoryStore, initial_input: String) -> Self {
        let history = match store.load() {
            Ok(history) => history
                .into_iter()
                .map(|item| HistoryItem::new(sanitize_fact(&item.date), sanitize_fact(&item.fact)))
                .collect(),
            Err(e) => {
                warn!(error = %format!("{:#}", e), "could not load history, starting empty");
                Vec::new()
            }
        };

        Self {
            source,
            store,
            phase: Phase::Idle,
            input: initial_input,
            current: None,
            history,
            selected_idx: 0,
            pending: None,
            loading_since: None,
            should_quit: false,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();
            self.poll_fetch();

            // Draw if dirty, or every 100ms for the spinner and terminal resizes
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                terminal.draw(|f| render_ui(f, &self.render_state()))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn render_state(&self) -> RenderState<'_> {
        let spinner_frame = self
            .loading_since
            .map(|since| (since.elapsed().as_millis() / 100) as usize)
            .unwrap_or(0);

        RenderState {
            input: &self.input,
            phase: self.phase,
            current: self.current.as_ref(),
            history: &self.history,
            selected_idx: self.selected_idx,
            status_message: self.status_message.as_ref(),
            spinner_frame,
        }
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearInput => {
                if self.input.is_empty() {
                    self.should_quit = true;
                } else {
                    self.input.clear();
                    self.needs_redraw = true;
                }
            }
            Action::Discover => self.discover(),
            Action::Surprise => self.surprise(),
            Action::CopyFact => self.copy_current_fact(),
            Action::ScrollUp => self.move_selection(-1),
            Action::ScrollDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-5),
            Action::PageDown => self.move_selection(5),
            Action::InputChar(c) => self.input_char(c),
            Action::DeleteChar => {
                if self.input.pop().is_some() {
                    self.needs_redraw = true;
                }
            }
            Action::None => {}
        }
    }

    /// Look up the typed date
    fn discover(&mut self) {
        if self.phase == Phase::Loading {
            return;
        }

        let input = self.input.trim();
        if input.is_empty() {
            self.set_status(EMPTY_INPUT_MESSAGE, MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        }

        match input.parse::<DayMonth>() {
            Ok(date) => self.start_fetch(date),
            Err(_) => {
                self.set_status(INVALID_DATE_MESSAGE, MessageType::Error, STATUS_ERROR_DURATION_MS)
            }
        }
    }

    /// Look up a random date, writing it into the input first
    fn surprise(&mut self) {
        if self.phase == Phase::Loading {
            return;
        }

        let date = random_date(&mut rand::rng());
        self.input = date.to_string();
        self.start_fetch(date);
    }

    fn start_fetch(&mut self, date: DayMonth) {
        debug!(%date, "starting lookup");
        let (tx, rx) = mpsc::channel();
        let source = Arc::clone(&self.source);

        thread::spawn(move || {
            let fact = fetch_fact(source.as_ref(), date, &mut rand::rng());
            // The receiver is gone only if the app has shut down
            let _ = tx.send(FetchOutcome { date, fact });
        });

        self.pending = Some(rx);
        self.phase = Phase::Loading;
        self.loading_since = Some(Instant::now());
        self.needs_redraw = true;
    }

    /// Pick up a finished fetch, if any
    fn poll_fetch(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };

        match rx.try_recv() {
            Ok(outcome) => self.complete_fetch(outcome),
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                error!("lookup worker exited without a result");
                self.pending = None;
                self.loading_since = None;
                self.phase = if self.current.is_some() { Phase::Displaying } else { Phase::Idle };
                self.set_status("✗ Lookup failed", MessageType::Error, STATUS_ERROR_DURATION_MS);
            }
        }
    }

    fn complete_fetch(&mut self, outcome: FetchOutcome) {
        let item = HistoryItem::new(outcome.date.to_string(), outcome.fact);
        self.current = Some(item.clone());
        append_capped(&mut self.history, item);

        if let Err(e) = self.store.save(&self.history) {
            error!(error = %format!("{:#}", e), "could not save history");
        }

        self.pending = None;
        self.loading_since = None;
        self.selected_idx = 0;
        self.phase = Phase::Displaying;
        self.needs_redraw = true;
    }

    fn copy_current_fact(&mut self) {
        let Some(current) = &self.current else {
            self.set_status("✗ No fact to copy yet", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };

        match copy_fact(&current.date, &current.fact) {
            Ok(()) => {
                self.set_status(
                    "✓ Copied to clipboard",
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                );
            }
            Err(e) => {
                self.set_status(
                    format!("✗ Clipboard error: {}", e),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.history.len();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    fn input_char(&mut self, c: char) {
        if self.input.chars().count() < MAX_INPUT_LEN && !c.is_control() {
            self.input.push(c);
            self.needs_redraw = true;
        }
    }

    /// Block until the outstanding fetch (if any) has been applied
    #[cfg(test)]
    fn wait_for_fetch(&mut self) {
        if let Some(rx) = self.pending.take() {
            let outcome = rx.recv_timeout(Duration::from_secs(10)).expect("fetch worker result");
            self.complete_fetch(outcome);
        }
    }
}
