//! Footer widget: key hints, or the active prompt.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{AppMode, AppState};

const HINTS: &str = "Tab focus | arrows move | Enter click | / search | p promote | d demote | b ban | u unban | r refresh | q quit";

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let line = match &app_state.mode {
        AppMode::Normal => Line::from(Span::styled(HINTS, Style::default().fg(Color::DarkGray))),
        AppMode::Search { buffer } => prompt("Search: ", buffer),
        AppMode::BanReason { buffer } => prompt("Ban reason (blank for default): ", buffer),
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn prompt<'a>(label: &'a str, buffer: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Yellow)),
        Span::raw(buffer),
        Span::styled("_", Style::default().fg(Color::Yellow)),
    ])
}
