//! Board widget drawing the glyph grid.

use board_core::Cell;
use client_frontend_core::view_model::{BoardMetrics, BoardView, GridView, PresentationMapper};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the board panel. Returns the inner area used for mouse hit tests.
///
/// `cursor` is the keyboard cursor, drawn only while the board has focus.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    board: &BoardView,
    cursor: Option<Cell>,
    theme: &T,
) -> Rect {
    let title = match board.grid().and_then(|grid| grid.cascade_banner) {
        Some(multiplier) => format!(" Board  x{multiplier} combo! "),
        None => " Board ".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);

    let paragraph = match board {
        BoardView::Loading(placeholder) => Paragraph::new(placeholder.label)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::DIM)),
        BoardView::Ready(grid) => Paragraph::new(grid_lines(grid, cursor, theme)),
    };

    frame.render_widget(paragraph.block(block), area);
    inner
}

fn grid_lines<'a, T: PresentationMapper<Style = Style>>(
    grid: &'a GridView,
    cursor: Option<Cell>,
    theme: &T,
) -> Vec<Line<'a>> {
    let metrics = grid.metrics;
    let mut lines = Vec::new();

    for (index, row) in grid.rows.iter().enumerate() {
        if index > 0 {
            lines.extend((0..metrics.gap).map(|_| Line::default()));
        }

        let styles: Vec<Style> = row
            .iter()
            .map(|cell| {
                let style = theme.style_cell(cell);
                if cursor == Some(cell.cell) {
                    style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
                } else {
                    style
                }
            })
            .collect();

        let glyph_line = row
            .iter()
            .zip(&styles)
            .enumerate()
            .flat_map(|(col, (cell, style))| {
                let gap = (col > 0).then(|| gap_span(&metrics));
                gap.into_iter().chain(std::iter::once(padded(cell.glyph, &metrics, *style)))
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(glyph_line));

        for _ in 1..metrics.cell_height {
            let filler = styles
                .iter()
                .enumerate()
                .flat_map(|(col, style)| {
                    let gap = (col > 0).then(|| gap_span(&metrics));
                    gap.into_iter().chain(std::iter::once(padded("", &metrics, *style)))
                })
                .collect::<Vec<_>>();
            lines.push(Line::from(filler));
        }
    }

    lines
}

fn gap_span(metrics: &BoardMetrics) -> Span<'static> {
    Span::raw(" ".repeat(usize::from(metrics.gap)))
}

/// Centers `glyph` in a span exactly `cell_width` columns wide.
fn padded<'a>(glyph: &'a str, metrics: &BoardMetrics, style: Style) -> Span<'a> {
    let width = usize::from(metrics.cell_width);
    let glyph_width = Span::raw(glyph).width().min(width);
    let pad = width - glyph_width;
    let left = pad / 2;
    let right = pad - left;
    Span::styled(
        format!("{}{}{}", " ".repeat(left), glyph, " ".repeat(right)),
        style,
    )
}

/// Board cell under terminal position `(column, row)`, if any.
pub fn hit_test(inner: Rect, metrics: &BoardMetrics, column: u16, row: u16) -> Option<Cell> {
    if column < inner.x || row < inner.y || column >= inner.right() || row >= inner.bottom() {
        return None;
    }
    let col = metrics.index_at(column - inner.x, metrics.cell_width)?;
    let row = metrics.index_at(row - inner.y, metrics.cell_height)?;
    Some(Cell::new(row, col))
}
