//! Framework-agnostic styling hook.
//!
//! View models decide *what* a cell or row is; a frontend decides how that
//! looks by implementing [`PresentationMapper`] for its own style type.

use crate::message::MessageLevel;

use super::board::CellView;
use super::directory::DirectoryRow;

/// Maps view-model values to a frontend's style type.
///
/// # Example
///
/// ```ignore
/// impl PresentationMapper for RatatuiTheme {
///     type Style = ratatui::style::Style;
///     // ...
/// }
/// ```
pub trait PresentationMapper {
    /// Style type for this frontend (e.g., `ratatui::style::Style`).
    type Style: Clone;

    /// Style for a board cell: base state first, then accent and effect.
    fn style_cell(&self, cell: &CellView) -> Self::Style;

    /// Style for message log entries based on level.
    fn style_message(&self, level: MessageLevel) -> Self::Style;

    /// Style for a directory row. `highlighted` marks the cursor row.
    fn style_user_row(&self, row: &DirectoryRow, highlighted: bool) -> Self::Style;
}
