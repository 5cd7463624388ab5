//! Transient animation events and per-render UI state.

use crate::error::GridError;
use crate::grid::{Cell, Grid};

/// Category of a board animation.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AnimationKind {
    Match,
    Drop,
    Invalid,
    Cascade,
}

/// Visual effect tied to a set of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationEvent {
    pub id: u64,
    pub kind: AnimationKind,
    pub cells: Vec<Cell>,
    /// Combo multiplier carried by cascade events.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cascade_multiplier: Option<u32>,
}

impl AnimationEvent {
    pub fn new(id: u64, kind: AnimationKind, cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            id,
            kind,
            cells: cells.into_iter().collect(),
            cascade_multiplier: None,
        }
    }

    pub fn with_multiplier(mut self, multiplier: u32) -> Self {
        self.cascade_multiplier = Some(multiplier);
        self
    }

    pub fn affects(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

/// Selection, hints, and animations accompanying a grid snapshot.
///
/// Animations are kept in append order; later entries are newer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardUiState {
    pub selected: Option<Cell>,
    pub hinted: Vec<Cell>,
    pub animations: Vec<AnimationEvent>,
}

impl BoardUiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selected(mut self, cell: impl Into<Cell>) -> Self {
        self.selected = Some(cell.into());
        self
    }

    pub fn with_hints(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.hinted = cells.into_iter().collect();
        self
    }

    pub fn push_animation(&mut self, event: AnimationEvent) {
        self.animations.push(event);
    }

    pub fn is_hinted(&self, cell: Cell) -> bool {
        self.hinted.contains(&cell)
    }

    /// Checks that every referenced coordinate lies inside `grid`.
    pub fn validate(&self, grid: &Grid) -> Result<(), GridError> {
        self.selected
            .iter()
            .chain(self.hinted.iter())
            .chain(self.animations.iter().flat_map(|event| event.cells.iter()))
            .try_for_each(|cell| grid.check(*cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileKind;

    #[test]
    fn validate_flags_first_out_of_range_cell() {
        let grid = Grid::filled(3, 3, TileKind::Green);
        let mut ui = BoardUiState::new()
            .with_selected(Cell::new(0, 0))
            .with_hints([Cell::new(2, 2)]);
        assert_eq!(ui.validate(&grid), Ok(()));

        ui.push_animation(AnimationEvent::new(1, AnimationKind::Drop, [Cell::new(3, 1)]));
        assert_eq!(
            ui.validate(&grid),
            Err(GridError::OutOfBounds {
                cell: Cell::new(3, 1),
                height: 3,
                width: 3
            })
        );
    }

    #[test]
    fn animation_kind_round_trips_through_strings() {
        assert_eq!("cascade".parse::<AnimationKind>(), Ok(AnimationKind::Cascade));
        assert_eq!(AnimationKind::Invalid.as_ref(), "invalid");
    }
}
