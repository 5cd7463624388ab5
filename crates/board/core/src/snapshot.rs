//! Grid plus transient UI state, as handed over by the engine per frame.

use crate::animation::BoardUiState;
use crate::error::GridError;
use crate::grid::Grid;

/// Everything a frontend needs to draw one frame of the board.
///
/// `grid` is `None` while the engine has not produced a board yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    #[cfg_attr(feature = "serde", serde(default))]
    pub grid: Option<Grid>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ui: BoardUiState,
}

impl BoardSnapshot {
    pub fn new(grid: Grid, ui: BoardUiState) -> Self {
        Self {
            grid: Some(grid),
            ui,
        }
    }

    /// Checks the UI state against the grid, when there is one.
    pub fn validate(&self) -> Result<(), GridError> {
        match &self.grid {
            Some(grid) => self.ui.validate(grid),
            None => Ok(()),
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use crate::{AnimationKind, Cell, TileKind};

    #[test]
    fn loads_engine_json() {
        let json = r#"{
            "grid": [["red", "blocked"], ["bomb", "empty"]],
            "ui": {
                "selected": { "row": 0, "col": 0 },
                "hinted": [],
                "animations": [
                    { "id": 4, "kind": "cascade", "cells": [{ "row": 1, "col": 0 }], "cascade_multiplier": 3 }
                ]
            }
        }"#;

        let snapshot: BoardSnapshot = serde_json::from_str(json).unwrap();
        let grid = snapshot.grid.as_ref().unwrap();
        assert_eq!(grid.get(Cell::new(1, 0)), Some(TileKind::Bomb));
        assert_eq!(snapshot.ui.animations[0].kind, AnimationKind::Cascade);
        assert_eq!(snapshot.ui.animations[0].cascade_multiplier, Some(3));
        assert_eq!(snapshot.validate(), Ok(()));
    }

    #[test]
    fn ragged_json_grid_is_rejected() {
        let json = r#"{ "grid": [["red", "blue"], ["green"]] }"#;
        assert!(serde_json::from_str::<BoardSnapshot>(json).is_err());
    }
}
