//! Directory widget: search line plus the user table.

use client_frontend_core::view_model::{DirectoryView, PresentationMapper};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

/// What the directory panel currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DirectoryPanel {
    #[default]
    Loading,
    /// No caller identity; the query is disabled.
    SignedOut,
    Failed(String),
    Ready(DirectoryView),
}

impl DirectoryPanel {
    pub fn view(&self) -> Option<&DirectoryView> {
        match self {
            Self::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.view().map_or(0, |view| view.rows.len())
    }
}

pub struct DirectoryWidgetState<'a> {
    pub panel: &'a DirectoryPanel,
    pub search_term: &'a str,
    pub highlighted: Option<usize>,
    pub pending: bool,
}

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    state: &DirectoryWidgetState<'_>,
    theme: &T,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_search(frame, chunks[0], state);

    let title = if state.pending { " Users (working...) " } else { " Users " };
    let block = Block::default().borders(Borders::ALL).title(title);

    let placeholder = match state.panel {
        DirectoryPanel::Loading => Some(("Loading users...".to_string(), Color::Gray)),
        DirectoryPanel::SignedOut => Some(("Sign in to view users".to_string(), Color::Yellow)),
        DirectoryPanel::Failed(reason) => Some((format!("Failed to load users: {reason}"), Color::LightRed)),
        DirectoryPanel::Ready(view) if view.is_empty() => {
            Some(("No users match".to_string(), Color::Gray))
        }
        DirectoryPanel::Ready(_) => None,
    };

    if let Some((text, color)) = placeholder {
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color))
            .block(block);
        frame.render_widget(paragraph, chunks[1]);
        return;
    }

    let Some(view) = state.panel.view() else {
        return;
    };

    let rows = view.rows.iter().enumerate().map(|(index, row)| {
        let ban = match (&row.ban_reason, row.banned) {
            (Some(reason), true) => format!("banned: {reason}"),
            _ => String::new(),
        };
        Row::new(vec![
            Cell::from(row.name.clone()),
            Cell::from(format!("@{}", row.username)),
            Cell::from(row.role_badges()),
            Cell::from(row.credits.to_string()),
            Cell::from(row.wallet.clone().unwrap_or_default()),
            Cell::from(ban),
        ])
        .style(theme.style_user_row(row, state.highlighted == Some(index)))
    });

    let header = Row::new(vec!["Name", "Username", "Roles", "Credits", "Wallet", "Status"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(20),
            Constraint::Percentage(18),
            Constraint::Percentage(14),
            Constraint::Percentage(10),
            Constraint::Percentage(16),
            Constraint::Percentage(22),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, chunks[1]);
}

fn render_search(frame: &mut Frame, area: Rect, state: &DirectoryWidgetState<'_>) {
    let summary = state
        .panel
        .view()
        .map(|view| {
            format!(
                "  {} users | {} admins | {} banned | {} credits",
                view.summary.users, view.summary.admins, view.summary.banned, view.summary.total_credits
            )
        })
        .unwrap_or_default();

    let term = if state.search_term.is_empty() {
        Span::styled("(all)", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(state.search_term.to_string(), Style::default().fg(Color::Cyan))
    };

    let line = Line::from(vec![
        Span::raw("Search: "),
        term,
        Span::styled(summary, Style::default().fg(Color::Gray)),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Directory ")),
        area,
    );
}
