//! Board view model: grid snapshot plus UI state to per-cell visuals.
//!
//! [`BoardView::build`] is a pure function of its inputs. Frontends call it on
//! every render and draw the result; the only side effect it enables is
//! forwarding a click through [`GridView::click`].

use bitflags::bitflags;
use board_core::{AnimationKind, BoardUiState, Cell, Grid, SpecialKind, TileKind};

use super::glyph::glyph;

/// Decorative accent layered over special pieces.
pub type SpecialAccent = SpecialKind;

bitflags! {
    /// Raw facts about a cell before precedence is applied.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CellFlags: u8 {
        const SELECTED = 0b0000_0001;
        const HINTED   = 0b0000_0010;
        const BLOCKED  = 0b0000_0100;
        const EMPTY    = 0b0000_1000;
        const SPECIAL  = 0b0001_0000;
        const ANIMATED = 0b0010_0000;

        /// Cells that swallow clicks.
        const INERT = Self::BLOCKED.bits() | Self::EMPTY.bits();
    }
}

impl CellFlags {
    pub fn is_interactive(self) -> bool {
        !self.intersects(Self::INERT)
    }
}

/// Base visual state of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum VisualState {
    Selected,
    Hinted,
    Blocked,
    Empty,
    #[default]
    Normal,
}

impl VisualState {
    /// Highest-precedence state: selected, hinted, blocked, empty, normal.
    pub fn resolve(flags: CellFlags) -> Self {
        if flags.contains(CellFlags::SELECTED) {
            Self::Selected
        } else if flags.contains(CellFlags::HINTED) {
            Self::Hinted
        } else if flags.contains(CellFlags::BLOCKED) {
            Self::Blocked
        } else if flags.contains(CellFlags::EMPTY) {
            Self::Empty
        } else {
            Self::Normal
        }
    }
}

/// Animation effect drawn on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum CellEffect {
    Flash,
    Bounce,
    Pulse,
}

impl CellEffect {
    pub const fn for_kind(kind: AnimationKind) -> Option<Self> {
        match kind {
            AnimationKind::Match => Some(Self::Flash),
            AnimationKind::Drop => Some(Self::Bounce),
            AnimationKind::Invalid => Some(Self::Pulse),
            AnimationKind::Cascade => None,
        }
    }
}

/// Effect of the most recently appended animation covering `cell`.
///
/// Earlier events on the same cell are discarded, so a winning cascade event
/// clears any effect below it.
pub fn active_effect(ui: &BoardUiState, cell: Cell) -> Option<CellEffect> {
    ui.animations
        .iter()
        .rev()
        .find(|event| event.affects(cell))
        .and_then(|event| CellEffect::for_kind(event.kind))
}

/// Presentation density. Only size and spacing depend on it.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Density {
    #[default]
    Comfortable,
    Compact,
}

impl Density {
    pub const fn from_compact(compact: bool) -> Self {
        if compact { Self::Compact } else { Self::Comfortable }
    }

    pub const fn metrics(self) -> BoardMetrics {
        match self {
            Self::Comfortable => BoardMetrics {
                cell_width: 4,
                cell_height: 2,
                gap: 1,
            },
            Self::Compact => BoardMetrics {
                cell_width: 3,
                cell_height: 1,
                gap: 0,
            },
        }
    }
}

/// Size and spacing of one board cell, in frontend units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoardMetrics {
    pub cell_width: u16,
    pub cell_height: u16,
    pub gap: u16,
}

impl BoardMetrics {
    /// Horizontal extent of `columns` cells including gaps.
    pub fn span_width(&self, columns: usize) -> u16 {
        span(columns, self.cell_width, self.gap)
    }

    pub fn span_height(&self, rows: usize) -> u16 {
        span(rows, self.cell_height, self.gap)
    }

    /// Index of the cell under `offset` along one axis, or `None` on a gap.
    pub fn index_at(&self, offset: u16, cell_extent: u16) -> Option<usize> {
        let stride = cell_extent + self.gap;
        if stride == 0 || offset % stride >= cell_extent {
            return None;
        }
        Some(usize::from(offset / stride))
    }
}

fn span(count: usize, extent: u16, gap: u16) -> u16 {
    let count = u16::try_from(count).unwrap_or(u16::MAX);
    if count == 0 {
        return 0;
    }
    count
        .saturating_mul(extent)
        .saturating_add((count - 1).saturating_mul(gap))
}

/// Placeholder drawn while no usable grid is available.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadingPlaceholder {
    pub label: &'static str,
    pub metrics: BoardMetrics,
}

/// One rendered board cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    pub cell: Cell,
    pub kind: TileKind,
    pub glyph: &'static str,
    pub flags: CellFlags,
    pub state: VisualState,
    pub accent: Option<SpecialAccent>,
    pub effect: Option<CellEffect>,
    pub interactive: bool,
}

impl CellView {
    fn build(cell: Cell, kind: TileKind, ui: &BoardUiState) -> Self {
        let effect = active_effect(ui, cell);

        let mut flags = CellFlags::empty();
        flags.set(CellFlags::SELECTED, ui.selected == Some(cell));
        flags.set(CellFlags::HINTED, ui.is_hinted(cell));
        flags.set(CellFlags::BLOCKED, kind.is_blocked());
        flags.set(CellFlags::EMPTY, kind.is_empty());
        flags.set(CellFlags::SPECIAL, kind.is_special());
        flags.set(CellFlags::ANIMATED, effect.is_some());

        Self {
            cell,
            kind,
            glyph: glyph(kind),
            flags,
            state: VisualState::resolve(flags),
            accent: kind.special(),
            effect,
            interactive: flags.is_interactive(),
        }
    }
}

/// Fully resolved board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridView {
    pub rows: Vec<Vec<CellView>>,
    pub metrics: BoardMetrics,
    /// Highest multiplier among active cascade events.
    pub cascade_banner: Option<u32>,
}

impl GridView {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn cell(&self, cell: Cell) -> Option<&CellView> {
        self.rows.get(cell.row)?.get(cell.col)
    }

    /// Forwards a click on `cell` to `handler` as `(row, col)`.
    ///
    /// Returns `false` without calling the handler for blocked, empty, or
    /// out-of-range cells.
    pub fn click<F>(&self, cell: Cell, mut handler: F) -> bool
    where
        F: FnMut(usize, usize),
    {
        match self.cell(cell) {
            Some(view) if view.interactive => {
                handler(cell.row, cell.col);
                true
            }
            _ => false,
        }
    }
}

/// Render-ready board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardView {
    Loading(LoadingPlaceholder),
    Ready(GridView),
}

impl BoardView {
    pub const LOADING_LABEL: &'static str = "Loading board...";

    pub fn build(grid: Option<&Grid>, ui: &BoardUiState, density: Density) -> Self {
        let metrics = density.metrics();

        let Some(grid) = grid.filter(|grid| !grid.is_degenerate()) else {
            return Self::Loading(LoadingPlaceholder {
                label: Self::LOADING_LABEL,
                metrics,
            });
        };

        let rows = grid
            .rows()
            .iter()
            .enumerate()
            .map(|(row, kinds)| {
                kinds
                    .iter()
                    .enumerate()
                    .map(|(col, &kind)| CellView::build(Cell::new(row, col), kind, ui))
                    .collect()
            })
            .collect();

        let cascade_banner = ui
            .animations
            .iter()
            .filter(|event| event.kind == AnimationKind::Cascade)
            .filter_map(|event| event.cascade_multiplier)
            .max();

        Self::Ready(GridView {
            rows,
            metrics,
            cascade_banner,
        })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    pub fn grid(&self) -> Option<&GridView> {
        match self {
            Self::Loading(_) => None,
            Self::Ready(view) => Some(view),
        }
    }
}

#[cfg(test)]
mod tests {
    use board_core::AnimationEvent;

    use super::*;

    fn sample_grid() -> Grid {
        Grid::new(vec![
            vec![TileKind::Red, TileKind::Blocked, TileKind::Bomb, TileKind::Blue],
            vec![TileKind::Empty, TileKind::Green, TileKind::LineRow, TileKind::Yellow],
            vec![TileKind::Purple, TileKind::Orange, TileKind::Rainbow, TileKind::Red],
        ])
        .expect("rectangular grid")
    }

    fn ready(grid: &Grid, ui: &BoardUiState) -> GridView {
        match BoardView::build(Some(grid), ui, Density::Comfortable) {
            BoardView::Ready(view) => view,
            BoardView::Loading(_) => panic!("expected a rendered grid"),
        }
    }

    #[test]
    fn selected_wins_over_hinted() {
        let grid = sample_grid();
        let cell = Cell::new(0, 0);
        let ui = BoardUiState::new().with_selected(cell).with_hints([cell]);

        let view = ready(&grid, &ui);
        let rendered = view.cell(cell).expect("cell in range");
        assert_eq!(rendered.state, VisualState::Selected);
        assert!(rendered.flags.contains(CellFlags::HINTED));
    }

    #[test]
    fn precedence_order_is_fixed() {
        let flags = CellFlags::HINTED | CellFlags::BLOCKED;
        assert_eq!(VisualState::resolve(flags), VisualState::Hinted);
        assert_eq!(VisualState::resolve(CellFlags::BLOCKED | CellFlags::EMPTY), VisualState::Blocked);
        assert_eq!(VisualState::resolve(CellFlags::EMPTY), VisualState::Empty);
        assert_eq!(VisualState::resolve(CellFlags::SPECIAL), VisualState::Normal);
    }

    #[test]
    fn specials_carry_accent_over_base_state() {
        let grid = sample_grid();
        let ui = BoardUiState::new().with_hints([Cell::new(0, 2)]);
        let view = ready(&grid, &ui);

        let bomb = view.cell(Cell::new(0, 2)).expect("bomb");
        assert_eq!(bomb.state, VisualState::Hinted);
        assert_eq!(bomb.accent, Some(SpecialKind::Area));

        let line = view.cell(Cell::new(1, 2)).expect("line");
        assert_eq!(line.accent, Some(SpecialKind::Line));
        assert_eq!(view.cell(Cell::new(2, 2)).and_then(|c| c.accent), Some(SpecialKind::Board));
        assert_eq!(view.cell(Cell::new(0, 0)).and_then(|c| c.accent), None);
    }

    #[test]
    fn clicks_on_blocked_or_empty_are_swallowed() {
        let grid = sample_grid();
        let view = ready(&grid, &BoardUiState::new());
        let mut clicks = Vec::new();

        assert!(!view.click(Cell::new(0, 1), |r, c| clicks.push((r, c))));
        assert!(!view.click(Cell::new(1, 0), |r, c| clicks.push((r, c))));
        assert!(!view.click(Cell::new(9, 9), |r, c| clicks.push((r, c))));
        assert!(clicks.is_empty());

        assert!(view.click(Cell::new(2, 3), |r, c| clicks.push((r, c))));
        assert!(view.click(Cell::new(0, 2), |r, c| clicks.push((r, c))));
        assert_eq!(clicks, vec![(2, 3), (0, 2)]);
    }

    #[test]
    fn degenerate_grids_render_loading() {
        let ui = BoardUiState::new();
        assert!(BoardView::build(None, &ui, Density::Compact).is_loading());

        let zero = Grid::new(Vec::new()).expect("empty grid");
        assert!(BoardView::build(Some(&zero), &ui, Density::Compact).is_loading());

        let zero_width = Grid::new(vec![Vec::new(), Vec::new()]).expect("zero width");
        assert!(BoardView::build(Some(&zero_width), &ui, Density::Compact).is_loading());
    }

    #[test]
    fn latest_animation_wins() {
        let grid = sample_grid();
        let cell = Cell::new(2, 3);
        let mut ui = BoardUiState::new();
        ui.push_animation(AnimationEvent::new(1, AnimationKind::Invalid, [cell]));
        ui.push_animation(AnimationEvent::new(2, AnimationKind::Match, [cell, Cell::new(2, 2)]));

        let view = ready(&grid, &ui);
        assert_eq!(view.cell(cell).and_then(|c| c.effect), Some(CellEffect::Flash));
        assert_eq!(view.cell(Cell::new(0, 0)).and_then(|c| c.effect), None);
    }

    #[test]
    fn winning_cascade_clears_earlier_effect() {
        let cell = Cell::new(1, 1);
        let mut ui = BoardUiState::new();
        ui.push_animation(AnimationEvent::new(1, AnimationKind::Drop, [cell]));
        assert_eq!(active_effect(&ui, cell), Some(CellEffect::Bounce));

        ui.push_animation(AnimationEvent::new(2, AnimationKind::Cascade, [cell]).with_multiplier(3));
        assert_eq!(active_effect(&ui, cell), None);

        let view = ready(&sample_grid(), &ui);
        assert_eq!(view.cascade_banner, Some(3));
    }

    #[test]
    fn density_changes_metrics_only() {
        let grid = sample_grid();
        let ui = BoardUiState::new().with_selected(Cell::new(1, 1));

        let comfortable = ready(&grid, &ui);
        let compact = match BoardView::build(Some(&grid), &ui, Density::Compact) {
            BoardView::Ready(view) => view,
            BoardView::Loading(_) => panic!("expected a rendered grid"),
        };

        assert_ne!(comfortable.metrics, compact.metrics);
        assert_eq!(comfortable.rows, compact.rows);
    }

    #[test]
    fn metrics_map_offsets_to_cells() {
        let metrics = Density::Comfortable.metrics();
        assert_eq!(metrics.span_width(3), 14);
        assert_eq!(metrics.index_at(0, metrics.cell_width), Some(0));
        assert_eq!(metrics.index_at(4, metrics.cell_width), None);
        assert_eq!(metrics.index_at(5, metrics.cell_width), Some(1));
    }
}
