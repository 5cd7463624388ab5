//! UI rendering composing all widgets.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::{
    presentation::{
        terminal::Tui,
        theme::RatatuiTheme,
        widgets::{self, directory::{DirectoryPanel, DirectoryWidgetState}},
    },
    state::{AppState, Focus},
};
use client_frontend_core::{message::MessageEntry, view_model::BoardView};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub board: &'a BoardView,
    pub directory: &'a DirectoryPanel,
    pub messages: &'a [MessageEntry],
    pub app_state: &'a AppState,
    pub caller: Option<&'a str>,
    pub mutation_pending: bool,
    pub message_panel_height: u16,
}

/// Draws one frame. Returns the board's inner area for mouse hit tests.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<Rect> {
    let theme = RatatuiTheme;
    let mut board_area = Rect::default();

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                        // Header
                Constraint::Min(0),                           // Board | Directory
                Constraint::Length(ctx.message_panel_height), // Messages
                Constraint::Length(1),                        // Footer
            ])
            .split(frame.area());

        widgets::header::render(frame, chunks[0], ctx.app_state, ctx.caller);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        let cursor = (ctx.app_state.focus == Focus::Board).then_some(ctx.app_state.board_cursor);
        board_area = widgets::board::render(frame, body[0], ctx.board, cursor, &theme);

        let directory_state = DirectoryWidgetState {
            panel: ctx.directory,
            search_term: &ctx.app_state.search_term,
            highlighted: (ctx.app_state.focus == Focus::Directory)
                .then_some(ctx.app_state.directory_index),
            pending: ctx.mutation_pending,
        };
        widgets::directory::render(frame, body[1], &directory_state, &theme);

        widgets::messages::render(frame, chunks[2], ctx.messages, &theme);
        widgets::footer::render(frame, chunks[3], ctx.app_state);
    })?;

    Ok(board_area)
}
