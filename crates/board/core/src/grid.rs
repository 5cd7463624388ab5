//! Rectangular board snapshot.

use std::fmt;

use crate::error::GridError;
use crate::tile::TileKind;

/// Board coordinate in (row, column) order, origin at the top-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Snapshot of the board owned by the game engine.
///
/// Invariant: every row has the same length as the first one. A grid with no
/// rows, or whose first row is empty, is accepted but reported as
/// [`Grid::is_degenerate`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Vec<TileKind>>", into = "Vec<Vec<TileKind>>"))]
pub struct Grid {
    rows: Vec<Vec<TileKind>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<TileKind>>) -> Result<Self, GridError> {
        let expected = rows.first().map_or(0, Vec::len);
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            return Err(GridError::RaggedRow {
                row,
                expected,
                found: cells.len(),
            });
        }

        Ok(Self { rows })
    }

    /// Builds a grid filled with a single kind.
    pub fn filled(height: usize, width: usize, kind: TileKind) -> Self {
        Self {
            rows: vec![vec![kind; width]; height],
        }
    }

    pub fn rows(&self) -> &[Vec<TileKind>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// No rows, or a zero-length first row.
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height() && cell.col < self.width()
    }

    pub fn get(&self, cell: Cell) -> Option<TileKind> {
        self.rows.get(cell.row)?.get(cell.col).copied()
    }

    /// Replaces the tile at `cell`, returning the previous kind.
    pub fn set(&mut self, cell: Cell, kind: TileKind) -> Result<TileKind, GridError> {
        let (height, width) = (self.height(), self.width());
        let slot = self
            .rows
            .get_mut(cell.row)
            .and_then(|row| row.get_mut(cell.col))
            .ok_or(GridError::OutOfBounds {
                cell,
                height,
                width,
            })?;
        Ok(std::mem::replace(slot, kind))
    }

    /// Iterates cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, TileKind)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, kind)| (Cell::new(row, col), *kind))
        })
    }

    pub(crate) fn check(&self, cell: Cell) -> Result<(), GridError> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                cell,
                height: self.height(),
                width: self.width(),
            })
        }
    }
}

impl TryFrom<Vec<Vec<TileKind>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<TileKind>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<Grid> for Vec<Vec<TileKind>> {
    fn from(grid: Grid) -> Self {
        grid.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_rows() {
        let err = Grid::new(vec![
            vec![TileKind::Red, TileKind::Blue],
            vec![TileKind::Green],
        ])
        .unwrap_err();

        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn empty_and_zero_width_grids_are_degenerate() {
        assert!(Grid::new(vec![]).unwrap().is_degenerate());
        assert!(Grid::new(vec![vec![], vec![]]).unwrap().is_degenerate());
        assert!(!Grid::filled(1, 1, TileKind::Blue).is_degenerate());
    }

    #[test]
    fn cells_iterate_row_major() {
        let grid = Grid::new(vec![
            vec![TileKind::Red, TileKind::Blue],
            vec![TileKind::Green, TileKind::Empty],
        ])
        .unwrap();

        let order: Vec<_> = grid.cells().map(|(cell, _)| (cell.row, cell.col)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(grid.get(Cell::new(1, 1)), Some(TileKind::Empty));
        assert_eq!(grid.get(Cell::new(2, 0)), None);
    }

    #[test]
    fn set_reports_out_of_bounds() {
        let mut grid = Grid::filled(2, 3, TileKind::Yellow);
        assert_eq!(grid.set(Cell::new(1, 2), TileKind::Bomb), Ok(TileKind::Yellow));
        assert!(matches!(
            grid.set(Cell::new(2, 0), TileKind::Bomb),
            Err(GridError::OutOfBounds { height: 2, width: 3, .. })
        ));
    }
}
