//! Glyphs and colours used by the tree geometry.

use ratatui::style::Color;

/// Plain needle glyph.
pub const NEEDLE: char = '*';
/// Needle glyphs on the left and right canopy edge.
pub const EDGE_LEFT: char = '/';
pub const EDGE_RIGHT: char = '\\';

/// Glyphs picked at random for ornaments.
pub const ORNAMENT_CHARS: &[char] = &['o', '@', 'O', '8', '&', '$'];

/// Colours picked at random for ornaments.
pub const ORNAMENT_COLORS: &[Color] = &[
    Color::Rgb(255, 0, 0),
    Color::Rgb(255, 255, 0),
    Color::Rgb(255, 105, 180), // hot pink
    Color::Rgb(0, 255, 255),
];

pub const BULB: char = '•';
pub const BULB_COLOR: Color = Color::Rgb(255, 215, 0);

pub const NEEDLE_COLOR: Color = Color::Rgb(0, 128, 0);
pub const NEEDLE_LIT: Color = Color::Rgb(100, 255, 100);

pub const TRUNK: char = '#';
pub const TRUNK_COLOR: Color = Color::Rgb(101, 67, 33);
pub const TRUNK_LIT: Color = Color::Rgb(200, 150, 50);

/// Gift box body and ribbon glyphs.
pub const GIFT_BODY: char = 'H';
pub const GIFT_RIBBON_ROW: char = '-';
pub const GIFT_RIBBON_COL: char = '|';
