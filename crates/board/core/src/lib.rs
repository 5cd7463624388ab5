//! Board snapshot types shared between the match-3 engine and frontends.
//!
//! The engine owns and mutates the grid; frontends only read one snapshot per
//! render together with the transient [`BoardUiState`].
pub mod animation;
pub mod error;
pub mod grid;
pub mod snapshot;
pub mod tile;

pub use animation::{AnimationEvent, AnimationKind, BoardUiState};
pub use error::GridError;
pub use grid::{Cell, Grid};
pub use snapshot::BoardSnapshot;
pub use tile::{SpecialKind, TileKind};
