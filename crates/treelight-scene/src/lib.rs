//! Procedural geometry for the decorated tree.
//!
//! The scene is generated once at startup as a flat list of cells placed
//! relative to the trunk base: negative `offset_y` is above the base row.
//! Shape is fixed; decoration is drawn from the injected random generator.

mod chars;

use std::collections::HashSet;

use rand::Rng;
use ratatui::style::Color;
use treelight_core::consts::{
    BULB_CHANCE, ORNAMENT_CHANCE, TREE_BASE_WIDTH, TREE_HEIGHT, TRUNK_HEIGHT, TRUNK_WIDTH,
};

pub use chars::*;

/// What a scene cell depicts.
///
/// Only needles and trunk react to the moving light; ornaments and gifts
/// keep their own colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Needle,
    Trunk,
    Ornament,
    Gift,
}

impl SceneKind {
    /// Whether illumination may replace the base colour.
    pub fn is_illuminable(self) -> bool {
        matches!(self, SceneKind::Needle | SceneKind::Trunk)
    }
}

/// A single positioned glyph of the tree, trunk or gifts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneCell {
    pub kind: SceneKind,
    pub glyph: char,
    pub base_color: Color,
    pub lit_color: Color,
    pub offset_x: i32,
    pub offset_y: i32,
}

/// A gift box placed beside the trunk.
#[derive(Debug, Clone, Copy)]
struct GiftBox {
    x: i32,
    width: i32,
    height: i32,
    color: Color,
}

const GIFTS: [GiftBox; 2] = [
    GiftBox {
        x: -8,
        width: 3,
        height: 2,
        color: Color::Rgb(255, 0, 0),
    },
    GiftBox {
        x: 6,
        width: 4,
        height: 2,
        color: Color::Rgb(0, 0, 255),
    },
];

/// The static scene: every cell plus the set of offsets they cover.
#[derive(Debug, Clone)]
pub struct Scene {
    cells: Vec<SceneCell>,
    occupied: HashSet<(i32, i32)>,
}

impl Scene {
    /// Generate the tree, trunk and gifts.
    pub fn build<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cells = Vec::new();
        push_canopy(&mut cells, rng);
        push_trunk(&mut cells);
        push_gifts(&mut cells);
        Self::from_cells(cells)
    }

    /// Wrap an explicit cell list.
    pub fn from_cells(cells: Vec<SceneCell>) -> Self {
        let occupied = cells.iter().map(|c| (c.offset_x, c.offset_y)).collect();
        Self { cells, occupied }
    }

    /// All cells in paint order.
    pub fn cells(&self) -> &[SceneCell] {
        &self.cells
    }

    /// Whether any cell sits at the given offset from the trunk base.
    pub fn occupies(&self, offset_x: i32, offset_y: i32) -> bool {
        self.occupied.contains(&(offset_x, offset_y))
    }
}

/// Row half-width of the canopy at row `y` counted from the apex.
pub fn canopy_half_width(y: i32) -> i32 {
    let width = (f64::from(y) / f64::from(TREE_HEIGHT) * f64::from(TREE_BASE_WIDTH)) as i32;
    width.max(1)
}

fn push_canopy<R: Rng + ?Sized>(cells: &mut Vec<SceneCell>, rng: &mut R) {
    for y in 0..TREE_HEIGHT {
        let offset_y = -(TREE_HEIGHT - y);
        let width = canopy_half_width(y);

        for x in -width..=width {
            if rng.gen_bool(ORNAMENT_CHANCE) {
                let glyph = ORNAMENT_CHARS[rng.gen_range(0..ORNAMENT_CHARS.len())];
                let color = ORNAMENT_COLORS[rng.gen_range(0..ORNAMENT_COLORS.len())];
                cells.push(fixed(SceneKind::Ornament, glyph, color, x, offset_y));
                continue;
            }
            if rng.gen_bool(BULB_CHANCE) {
                cells.push(fixed(SceneKind::Ornament, BULB, BULB_COLOR, x, offset_y));
                continue;
            }

            let glyph = if x == -width {
                EDGE_LEFT
            } else if x == width {
                EDGE_RIGHT
            } else {
                NEEDLE
            };
            cells.push(SceneCell {
                kind: SceneKind::Needle,
                glyph,
                base_color: NEEDLE_COLOR,
                lit_color: NEEDLE_LIT,
                offset_x: x,
                offset_y,
            });
        }
    }
}

fn push_trunk(cells: &mut Vec<SceneCell>) {
    for y in 0..TRUNK_HEIGHT {
        for x in -TRUNK_WIDTH / 2..=TRUNK_WIDTH / 2 {
            cells.push(SceneCell {
                kind: SceneKind::Trunk,
                glyph: TRUNK,
                base_color: TRUNK_COLOR,
                lit_color: TRUNK_LIT,
                offset_x: x,
                offset_y: y,
            });
        }
    }
}

fn push_gifts(cells: &mut Vec<SceneCell>) {
    for gift in GIFTS {
        for gh in 0..gift.height {
            for gw in 0..gift.width {
                // Column ribbon wins where the two ribbons cross.
                let glyph = if gw == gift.width / 2 {
                    GIFT_RIBBON_COL
                } else if gh == gift.height / 2 {
                    GIFT_RIBBON_ROW
                } else {
                    GIFT_BODY
                };
                cells.push(fixed(
                    SceneKind::Gift,
                    glyph,
                    gift.color,
                    gift.x + gw,
                    TRUNK_HEIGHT - gh - 1,
                ));
            }
        }
    }
}

/// A cell whose colour never changes under the light.
fn fixed(kind: SceneKind, glyph: char, color: Color, offset_x: i32, offset_y: i32) -> SceneCell {
    SceneCell {
        kind,
        glyph,
        base_color: color,
        lit_color: color,
        offset_x,
        offset_y,
    }
}
