//! Errors raised while accepting engine snapshots.

use crate::grid::Cell;

/// Errors surfaced when a grid or its transient UI state is malformed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Row length differs from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Coordinate outside the grid.
    #[error("cell {cell} is outside the {height}x{width} grid")]
    OutOfBounds {
        cell: Cell,
        height: usize,
        width: usize,
    },
}
