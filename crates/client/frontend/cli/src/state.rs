//! Application state for mode management and UI context.

use board_core::Cell;
use ratatui::layout::Rect;

/// Panel receiving cursor keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Board,
    Directory,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Self::Board => Self::Directory,
            Self::Directory => Self::Board,
        }
    }
}

/// Top-level application mode determining input handling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AppMode {
    #[default]
    Normal,
    /// Editing the directory search term.
    Search { buffer: String },
    /// Typing a ban reason for the highlighted user.
    BanReason { buffer: String },
}

impl AppMode {
    /// Text buffer of the active prompt, if any.
    pub fn buffer_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::Normal => None,
            Self::Search { buffer } | Self::BanReason { buffer } => Some(buffer),
        }
    }

    pub fn is_prompt(&self) -> bool {
        !matches!(self, Self::Normal)
    }
}

/// Mutable application state tracking mode, focus, and cursors.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub mode: AppMode,
    pub focus: Focus,
    /// Keyboard cursor on the board.
    pub board_cursor: Cell,
    /// Highlighted directory row.
    pub directory_index: usize,
    /// Directory search term applied to the current page.
    pub search_term: String,
    /// Inner area of the board panel from the last draw, for mouse hit tests.
    pub board_area: Option<Rect>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the board cursor by `(d_row, d_col)`, clamped to the grid.
    pub fn move_board_cursor(&mut self, d_row: isize, d_col: isize, height: usize, width: usize) {
        if height == 0 || width == 0 {
            return;
        }
        self.board_cursor = Cell::new(
            step(self.board_cursor.row, d_row, height),
            step(self.board_cursor.col, d_col, width),
        );
    }

    /// Moves the directory highlight by `delta`, clamped to `len` rows.
    pub fn move_directory(&mut self, delta: isize, len: usize) {
        self.directory_index = step(self.directory_index, delta, len);
    }

    pub fn clamp_directory(&mut self, len: usize) {
        self.directory_index = self.directory_index.min(len.saturating_sub(1));
    }
}

fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(len - 1)
}
