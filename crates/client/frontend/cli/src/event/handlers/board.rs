//! Board cursor and click forwarding.

use board_core::Cell;

use super::super::EventLoop;
use client_frontend_core::message::MessageLevel;

impl EventLoop {
    pub(in crate::event) fn move_board_cursor(&mut self, d_row: isize, d_col: isize) {
        let Some(grid) = self.board_view.grid() else {
            return;
        };
        let (height, width) = (grid.height(), grid.width());
        self.app_state.move_board_cursor(d_row, d_col, height, width);
    }

    /// Sends a click through the board's gate.
    ///
    /// Forwarded clicks toggle the selection; blocked, empty, and off-board
    /// cells never reach the handler.
    pub(in crate::event) fn click_board(&mut self, cell: Cell) {
        let Some(grid) = self.board_view.grid() else {
            return;
        };

        let mut clicked = None;
        if !grid.click(cell, |row, col| clicked = Some(Cell::new(row, col))) {
            tracing::debug!(%cell, "Board click swallowed");
            return;
        }

        if let Some(cell) = clicked {
            self.on_board_click(cell);
        }
    }

    fn on_board_click(&mut self, cell: Cell) {
        let ui = &mut self.context.board.ui;
        if ui.selected == Some(cell) {
            ui.selected = None;
            self.context
                .messages
                .push_level(format!("Deselected {cell}"), MessageLevel::Info);
        } else {
            ui.selected = Some(cell);
            self.context
                .messages
                .push_level(format!("Selected {cell}"), MessageLevel::Info);
        }
        tracing::debug!(%cell, "Board click");
        self.rebuild_board();
    }
}
