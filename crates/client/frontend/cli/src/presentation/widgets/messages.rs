//! Message panel widget.

use client_frontend_core::{message::MessageEntry, view_model::PresentationMapper};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render `messages` (newest first) oldest at the top.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    messages: &[MessageEntry],
    theme: &T,
) {
    let visible = usize::from(area.height.saturating_sub(2));
    let lines: Vec<Line> = messages
        .iter()
        .take(visible)
        .rev()
        .map(|entry| Line::from(Span::styled(entry.text.clone(), theme.style_message(entry.level))))
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Messages "));
    frame.render_widget(paragraph, area);
}
