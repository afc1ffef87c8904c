use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::app::{MessageType, Phase, StatusMessage};
use super::layout::AppLayout;
use crate::models::HistoryItem;

const ACCENT: Color = Color::Rgb(71, 118, 230);
const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const BAR_BG: Color = Color::Rgb(24, 24, 27);
const ERROR: Color = Color::Rgb(239, 68, 68);
const SUCCESS: Color = Color::Rgb(16, 185, 129);

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub const FACT_PLACEHOLDER: &str = "Pick a date and discover something surprising!";
pub const NO_HISTORY: &str = "No lookups yet";

/// Everything the renderer needs from the app for one frame
pub struct RenderState<'a> {
    pub input: &'a str,
    pub phase: Phase,
    pub current: Option<&'a HistoryItem>,
    /// Oldest first, as stored
    pub history: &'a [HistoryItem],
    pub selected_idx: usize,
    pub status_message: Option<&'a StatusMessage>,
    pub spinner_frame: usize,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, layout.header_area);
    render_input(frame, layout.input_area, state);
    render_fact(frame, layout.fact_area, state);
    render_history(frame, layout.history_area, state.history, state.selected_idx);
    render_status_bar(frame, layout.status_area, state);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "On This Day",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Discover what happened on any date",
            Style::default().fg(MUTED),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_input(frame: &mut Frame, area: Rect, state: &RenderState) {
    let content = if state.input.is_empty() {
        Line::from(Span::styled("DD/MM", Style::default().fg(MUTED)))
    } else {
        Line::from(Span::styled(state.input, Style::default().fg(BRIGHT)))
    };

    let title = if state.phase == Phase::Loading {
        format!(" Date {} looking up… ", SPINNER[state.spinner_frame % SPINNER.len()])
    } else {
        " Date (e.g. 25/12) ".to_string()
    };

    let border_color = if state.phase == Phase::Loading { MUTED } else { ACCENT };
    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title),
    );

    frame.render_widget(paragraph, area);
}

fn render_fact(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (title, content) = match state.current {
        Some(item) => (
            format!(" {} ", item.date),
            Text::from(Span::styled(item.fact.as_str(), Style::default().fg(BRIGHT))),
        ),
        None => (
            " Fact ".to_string(),
            Text::from(Span::styled(
                FACT_PLACEHOLDER,
                Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
            )),
        ),
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT))
                .title(title),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// History list, newest first
fn render_history(frame: &mut Frame, area: Rect, history: &[HistoryItem], selected_idx: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
        .title(" Recent lookups ");

    if history.is_empty() {
        let paragraph = Paragraph::new(Span::styled(
            NO_HISTORY,
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    // Each entry is one line; skip ahead so the selection stays visible
    let visible = usize::from(area.height.saturating_sub(2)).max(1);
    let offset = selected_idx.saturating_sub(visible - 1);

    let items: Vec<ListItem> = history
        .iter()
        .rev()
        .enumerate()
        .skip(offset)
        .map(|(idx, item)| {
            let style = if idx == selected_idx {
                Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", item.date), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(item.fact.as_str()),
            ]))
            .style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (status_text, style) = if let Some(msg) = state.status_message {
        let color = match msg.message_type {
            MessageType::Success => SUCCESS,
            MessageType::Error => ERROR,
        };
        (format!(" {} ", msg.text), Style::default().fg(color).bg(BAR_BG))
    } else {
        let mut parts = vec![];

        parts.push(match state.phase {
            Phase::Idle => "[READY]",
            Phase::Loading => "[LOADING]",
            Phase::Displaying => "[FACT]",
        });
        if state.phase != Phase::Loading {
            parts.push("Enter: discover");
            parts.push("Ctrl+S: surprise me");
        }
        if state.current.is_some() {
            parts.push("Ctrl+Y: copy");
        }
        if !state.history.is_empty() {
            parts.push("↑/↓: history");
        }
        parts.push("Ctrl+C: quit");

        (format!(" {} ", parts.join(" | ")), Style::default().fg(BRIGHT).bg(BAR_BG))
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}
