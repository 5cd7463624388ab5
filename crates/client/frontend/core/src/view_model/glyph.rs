//! Tile kind to display glyph.

use board_core::TileKind;

/// Glyph drawn for a tile kind. Only [`TileKind::Empty`] draws nothing.
///
/// Every glyph is a single wide emoji without a variation selector, so its
/// measured width matches what terminals draw.
pub const fn glyph(kind: TileKind) -> &'static str {
    match kind {
        TileKind::Red => "🔴",
        TileKind::Blue => "🔵",
        TileKind::Green => "🟢",
        TileKind::Yellow => "🟡",
        TileKind::Purple => "🟣",
        TileKind::Orange => "🟠",
        TileKind::LineRow => "⏩",
        TileKind::LineColumn => "⏫",
        TileKind::LineCross => "➕",
        TileKind::Bomb => "💣",
        TileKind::Rainbow => "🌈",
        TileKind::Blocked => "🧱",
        TileKind::Empty => "",
    }
}

/// Glyph for an engine-supplied kind name; unknown names draw as the
/// default ordinary piece.
pub fn glyph_for_name(name: &str) -> &'static str {
    glyph(TileKind::parse_lossy(name))
}
