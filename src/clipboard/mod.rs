//! Copying the displayed fact to the system clipboard

use anyhow::{Context, Result, bail};
use arboard::Clipboard;

/// Trait for clipboard operations (allows mocking in tests)
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// Text placed on the clipboard for a lookup: `DD/MM: fact`
pub fn clipboard_text(date: &str, fact: &str) -> String {
    format!("{}: {}", date, fact)
}

fn validate_fact(fact: &str) -> Result<()> {
    if fact.trim().is_empty() {
        bail!("No fact to copy yet");
    }
    Ok(())
}

#[cfg(test)]
fn copy_with_provider(
    date: &str,
    fact: &str,
    provider: &mut dyn ClipboardProvider,
) -> Result<()> {
    validate_fact(fact)?;
    provider.set_text(&clipboard_text(date, fact))
}

/// Copy a looked-up fact to the system clipboard.
///
/// # Errors
/// Returns error if:
/// - `fact` is empty
/// - System clipboard is unavailable (headless environment, no display server)
/// - Clipboard access is denied or locked by another process
pub fn copy_fact(date: &str, fact: &str) -> Result<()> {
    // Validate before opening the system clipboard
    validate_fact(fact)?;
    let mut clipboard = SystemClipboard::new()?;
    clipboard.set_text(&clipboard_text(date, fact))
}
