//! Sanitizing remote text before it reaches the terminal
//!
//! Event text comes from a third-party feed and is printed by the CLI and drawn by
//! the TUI. Escape sequences in it could move the cursor or recolor the screen, so
//! facts pass through [`sanitize_fact`] before they are stored or displayed.

/// Strips ANSI CSI sequences and control characters, then collapses runs of
/// whitespace (newlines included) into single spaces
///
/// # Examples
///
/// ```
/// use on_this_day::utils::terminal::sanitize_fact;
///
/// assert_eq!(sanitize_fact("\x1b[31mApollo 11\x1b[0m\nlands"), "Apollo 11 lands");
/// ```
pub fn sanitize_fact(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // ESC [ params final-byte
            if chars.peek() == Some(&'[') {
                chars.next();
                while let Some(next_ch) = chars.next() {
                    if next_ch.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }

        if ch.is_whitespace() {
            stripped.push(' ');
        } else if !ch.is_control() {
            stripped.push(ch);
        }
    }

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
