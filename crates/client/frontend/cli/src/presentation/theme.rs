//! Ratatui theme implementation of PresentationMapper.
//!
//! This module provides concrete styling for the terminal UI, implementing
//! the framework-agnostic PresentationMapper trait from client-frontend-core.

use client_frontend_core::{
    message::MessageLevel,
    view_model::{CellEffect, CellView, DirectoryRow, PresentationMapper, SpecialAccent, VisualState},
};
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme implementing PresentationMapper.
///
/// This provides consistent color schemes and styling rules for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    fn base_cell(state: VisualState) -> Style {
        match state {
            VisualState::Selected => Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            VisualState::Hinted => Style::default()
                .bg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
            VisualState::Blocked => Style::default().bg(Color::DarkGray),
            VisualState::Empty => Style::default().bg(Color::Black),
            VisualState::Normal => Style::default(),
        }
    }
}

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_cell(&self, cell: &CellView) -> Self::Style {
        let mut style = Self::base_cell(cell.state);

        style = match cell.accent {
            Some(SpecialAccent::Line) => style.fg(Color::LightBlue),
            Some(SpecialAccent::Area) => style.fg(Color::LightRed),
            Some(SpecialAccent::Board) => style.fg(Color::LightMagenta),
            None => style,
        };

        match cell.effect {
            Some(CellEffect::Flash) => style.add_modifier(Modifier::REVERSED),
            Some(CellEffect::Bounce) => style.add_modifier(Modifier::ITALIC),
            Some(CellEffect::Pulse) => style.add_modifier(Modifier::SLOW_BLINK),
            None => style,
        }
    }

    fn style_message(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Success => Style::default().fg(Color::LightGreen),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    fn style_user_row(&self, row: &DirectoryRow, highlighted: bool) -> Self::Style {
        let mut style = if row.banned {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
        } else if row.is_admin() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        if highlighted {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use board_core::{Cell, TileKind};
    use client_frontend_core::view_model::CellFlags;

    use super::*;

    fn cell(state: VisualState, accent: Option<SpecialAccent>, effect: Option<CellEffect>) -> CellView {
        CellView {
            cell: Cell::new(0, 0),
            kind: TileKind::Bomb,
            glyph: "💣",
            flags: CellFlags::empty(),
            state,
            accent,
            effect,
            interactive: true,
        }
    }

    #[test]
    fn accent_and_effect_layer_over_state() {
        let theme = RatatuiTheme::new();
        let style = theme.style_cell(&cell(
            VisualState::Selected,
            Some(SpecialAccent::Area),
            Some(CellEffect::Flash),
        ));

        assert_eq!(style.bg, Some(Color::Yellow));
        assert_eq!(style.fg, Some(Color::LightRed));
        assert!(style.add_modifier.contains(Modifier::REVERSED));
    }
}
