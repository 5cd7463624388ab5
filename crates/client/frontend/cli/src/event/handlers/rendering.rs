//! Rendering handlers.

use anyhow::Result;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop {
    /// Render current state.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let height = self.cli_config.ui.message_panel_height;
        let messages = self.context.messages.recent(usize::from(height));
        let caller = self.context.directory.signed_in_user();
        let mutation_pending = self.context.directory.mutations().any_pending();

        let ctx = ui::RenderContext {
            board: &self.board_view,
            directory: &self.directory_panel,
            messages: &messages,
            app_state: &self.app_state,
            caller: caller.as_ref().map(|id| id.as_str()),
            mutation_pending,
            message_panel_height: height,
        };

        let board_area = ui::render(terminal, &ctx)?;
        self.app_state.board_area = Some(board_area);
        Ok(())
    }
}
