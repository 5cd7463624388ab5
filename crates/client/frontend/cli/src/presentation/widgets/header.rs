//! Header widget displaying focus and prompt mode.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AppMode, AppState, Focus};

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState, caller: Option<&str>) {
    let focus = match app_state.focus {
        Focus::Board => "board",
        Focus::Directory => "directory",
    };
    let mode_text = match &app_state.mode {
        AppMode::Normal => "",
        AppMode::Search { .. } => " [SEARCH]",
        AppMode::BanReason { .. } => " [BAN REASON]",
    };

    let text = Line::from(vec![
        Span::raw("Signed in: "),
        Span::styled(
            caller.unwrap_or("-").to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Focus: "),
        Span::styled(focus, Style::default().fg(Color::LightGreen)),
        Span::styled(
            mode_text,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(" Puzzle Admin "));

    frame.render_widget(paragraph, area);
}
