//! Tile kinds occupying board cells.

use std::str::FromStr;

/// What currently occupies a board cell.
///
/// Ordinary pieces are the six matchable colors. Special pieces are produced
/// by combos and clear lines, areas, or the whole board when matched.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "snake_case", from = "String")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TileKind {
    #[default]
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    /// Clears the whole row.
    LineRow,
    /// Clears the whole column.
    LineColumn,
    /// Clears both row and column.
    LineCross,
    /// Clears the surrounding 3x3 area.
    Bomb,
    /// Clears every piece of one color.
    Rainbow,
    Blocked,
    Empty,
}

/// Clearing pattern of a special piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SpecialKind {
    Line,
    Area,
    Board,
}

impl TileKind {
    /// Parses an engine-supplied name, falling back to the default ordinary
    /// piece for anything unrecognized.
    pub fn parse_lossy(name: &str) -> Self {
        Self::from_str(name.trim()).unwrap_or_default()
    }

    pub const fn is_ordinary(self) -> bool {
        matches!(
            self,
            Self::Red | Self::Blue | Self::Green | Self::Yellow | Self::Purple | Self::Orange
        )
    }

    pub const fn is_special(self) -> bool {
        self.special().is_some()
    }

    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the clearing pattern for special pieces.
    pub const fn special(self) -> Option<SpecialKind> {
        match self {
            Self::LineRow | Self::LineColumn | Self::LineCross => Some(SpecialKind::Line),
            Self::Bomb => Some(SpecialKind::Area),
            Self::Rainbow => Some(SpecialKind::Board),
            _ => None,
        }
    }
}

impl From<String> for TileKind {
    fn from(name: String) -> Self {
        Self::parse_lossy(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parse_accepts_snake_case_in_any_case() {
        assert_eq!(TileKind::parse_lossy("line_row"), TileKind::LineRow);
        assert_eq!(TileKind::parse_lossy("BOMB"), TileKind::Bomb);
        assert_eq!(TileKind::parse_lossy(" empty "), TileKind::Empty);
    }

    #[test]
    fn unknown_names_fall_back_to_ordinary_piece() {
        let kind = TileKind::parse_lossy("mystery_gem");
        assert_eq!(kind, TileKind::default());
        assert!(kind.is_ordinary());
    }

    #[test]
    fn specials_are_classified_by_pattern() {
        let lines = TileKind::iter()
            .filter(|kind| kind.special() == Some(SpecialKind::Line))
            .count();
        assert_eq!(lines, 3);
        assert_eq!(TileKind::Bomb.special(), Some(SpecialKind::Area));
        assert_eq!(TileKind::Rainbow.special(), Some(SpecialKind::Board));
        assert!(!TileKind::Blocked.is_special());
        assert!(!TileKind::Empty.is_ordinary());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_unknown_kind_leniently() {
        let kinds: Vec<TileKind> = serde_json::from_str(r#"["blue", "rainbow", "lava"]"#).unwrap();
        assert_eq!(kinds, vec![TileKind::Blue, TileKind::Rainbow, TileKind::Red]);
    }
}
