//! View models derived from board snapshots and directory pages.
pub mod board;
pub mod directory;
pub mod glyph;
pub mod presentation;

pub use board::{
    BoardMetrics, BoardView, CellEffect, CellFlags, CellView, Density, GridView,
    LoadingPlaceholder, SpecialAccent, VisualState, active_effect,
};
pub use directory::{DirectoryRow, DirectoryView};
pub use glyph::{glyph, glyph_for_name};
pub use presentation::PresentationMapper;
