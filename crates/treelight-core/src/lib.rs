//! Core types and constants for the treelight animation.
//!
//! Everything here is shared by the scene builder, the renderer and the
//! binary: the 3D vector used by the orbit and particles, the screen
//! anchor of the tree, the colour model and the compile-time tuning knobs.

pub mod color;
pub mod consts;

pub use color::{SKY_BASE, hsv_to_rgb, sky_glow, sky_star_fg};

use consts::{BASE_BOTTOM_MARGIN, FILL_BELOW_BASE, TREE_HEIGHT};

/// A point or velocity in scene space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Construct a new vector.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Where the tree sits on a terminal of a given size.
///
/// All coordinates are signed: on small terminals the tree top lies above
/// the first row and `top_y` goes negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeLayout {
    /// Terminal width in cells.
    pub width: u16,
    /// Terminal height in cells.
    pub height: u16,
    /// Column of the trunk centre.
    pub mid_x: i32,
    /// Row of the canopy base (scene offset `y = 0`).
    pub base_y: i32,
    /// Row of the tree apex.
    pub top_y: i32,
}

impl TreeLayout {
    /// Compute the tree anchor for a terminal of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        let base_y = i32::from(height) - BASE_BOTTOM_MARGIN;
        Self {
            width,
            height,
            mid_x: i32::from(width) / 2,
            base_y,
            top_y: base_y - TREE_HEIGHT,
        }
    }

    /// Whether `(x, y)` is a visible cell.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < i32::from(self.width) && y < i32::from(self.height)
    }

    /// Screen position of a scene offset relative to the trunk base.
    pub fn anchor(&self, offset_x: i32, offset_y: i32) -> (i32, i32) {
        (self.mid_x + offset_x, self.base_y + offset_y)
    }

    /// Last row (inclusive) of the band repainted around the tree each frame.
    pub fn fill_bottom(&self) -> i32 {
        (self.base_y + FILL_BELOW_BASE).min(i32::from(self.height) - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_small_terminal() {
        let layout = TreeLayout::new(80, 24);
        assert_eq!(layout.mid_x, 40);
        assert_eq!(layout.base_y, 20);
        assert_eq!(layout.top_y, -2);
    }

    #[test]
    fn test_layout_large_terminal() {
        let layout = TreeLayout::new(120, 40);
        assert_eq!(layout.base_y, 36);
        assert_eq!(layout.top_y, 14);
        assert_eq!(layout.anchor(0, -22), (60, 14));
        assert_eq!(layout.fill_bottom(), 39);
    }

    #[test]
    fn test_layout_contains() {
        let layout = TreeLayout::new(10, 5);
        assert!(layout.contains(0, 0));
        assert!(layout.contains(9, 4));
        assert!(!layout.contains(10, 4));
        assert!(!layout.contains(-1, 0));
        assert!(!layout.contains(0, 5));
    }

    #[test]
    fn test_vector_add() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v += Vector3::new(0.5, -1.0, 0.0);
        assert_eq!(v, Vector3::new(1.5, 1.0, 3.0));
    }
}
