use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Single-screen layout, top to bottom
pub struct AppLayout {
    pub header_area: Rect,
    pub input_area: Rect,
    pub fact_area: Rect,
    pub history_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// - Header: 2 rows (title + subtitle)
    /// - Date input: 3 rows (bordered single line)
    /// - Fact panel: 7 rows
    /// - History list: remaining rows
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(7),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header_area: chunks[0],
            input_area: chunks[1],
            fact_area: chunks[2],
            history_area: chunks[3],
            status_area: chunks[4],
        }
    }
}
