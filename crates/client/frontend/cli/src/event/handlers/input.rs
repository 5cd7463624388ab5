//! Input handling (keyboard and mouse).

use anyhow::Result;
use crossterm::event::{
    self as term_event, Event as TermEvent, KeyEvent, KeyEventKind, MouseButton, MouseEvent,
    MouseEventKind,
};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{
    input::KeyAction,
    presentation::{terminal::Tui, widgets::board::hit_test},
    state::{AppMode, Focus},
};
use client_directory_core::MutationKind;

impl EventLoop {
    /// Poll for terminal input and handle UI interactions.
    pub(in crate::event) async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal).await
            }
            TermEvent::Mouse(mouse) => {
                self.handle_mouse(mouse, terminal)?;
                Ok(false)
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Handle key press and dispatch to appropriate handler.
    async fn handle_key_press(&mut self, key: KeyEvent, terminal: &mut Tui) -> Result<bool> {
        match self.input.handle_key(key, &self.app_state.mode) {
            KeyAction::Quit => return Ok(true),
            KeyAction::MoveCursor(d_row, d_col) => match self.app_state.focus {
                Focus::Board => self.move_board_cursor(d_row, d_col),
                Focus::Directory => {
                    let len = self.directory_panel.len();
                    self.app_state.move_directory(d_row, len);
                }
            },
            KeyAction::Click => {
                if self.app_state.focus == Focus::Board {
                    self.click_board(self.app_state.board_cursor);
                }
            }
            KeyAction::ToggleFocus => {
                self.app_state.focus = self.app_state.focus.toggled();
            }
            KeyAction::BeginSearch => {
                self.app_state.mode = AppMode::Search {
                    buffer: self.app_state.search_term.clone(),
                };
            }
            KeyAction::Mutate(MutationKind::Ban) => {
                if self.highlighted_user().is_some() {
                    self.app_state.mode = AppMode::BanReason {
                        buffer: String::new(),
                    };
                }
            }
            KeyAction::Mutate(kind) => {
                self.run_mutation(kind, "", terminal).await?;
            }
            KeyAction::Refresh => {
                self.context.directory.invalidate_all().await;
                self.refresh_directory().await;
            }
            KeyAction::Input(ch) => {
                if let Some(buffer) = self.app_state.mode.buffer_mut() {
                    buffer.push(ch);
                }
            }
            KeyAction::Backspace => {
                if let Some(buffer) = self.app_state.mode.buffer_mut() {
                    buffer.pop();
                }
            }
            KeyAction::Submit => self.submit_prompt(terminal).await?,
            KeyAction::Cancel => self.app_state.mode = AppMode::Normal,
            KeyAction::None => return Ok(false),
        }

        self.render(terminal)?;
        Ok(false)
    }

    async fn submit_prompt(&mut self, terminal: &mut Tui) -> Result<()> {
        match std::mem::take(&mut self.app_state.mode) {
            AppMode::Search { buffer } => {
                self.app_state.search_term = buffer.trim().to_string();
                self.app_state.directory_index = 0;
                self.refresh_directory().await;
            }
            AppMode::BanReason { buffer } => {
                self.run_mutation(MutationKind::Ban, &buffer, terminal).await?;
            }
            AppMode::Normal => {}
        }
        Ok(())
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, terminal: &mut Tui) -> Result<()> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || self.app_state.mode.is_prompt() {
            return Ok(());
        }

        let (Some(area), Some(grid)) = (self.app_state.board_area, self.board_view.grid()) else {
            return Ok(());
        };

        if let Some(cell) = hit_test(area, &grid.metrics, mouse.column, mouse.row) {
            self.app_state.focus = Focus::Board;
            if grid.cell(cell).is_some() {
                self.app_state.board_cursor = cell;
            }
            self.click_board(cell);
            self.render(terminal)?;
        }
        Ok(())
    }
}
