//! Sparse twinkling stars above the tree.

use std::collections::HashSet;
use std::f64::consts::TAU;

use log::debug;
use rand::Rng;
use treelight_core::consts::{
    SKY_GLOW_RADIUS, SKY_STAR_COUNT, SKY_STAR_SPEED_MAX, SKY_STAR_SPEED_MIN, SKY_TWINKLE_SPEED,
    TREE_TOP_MARGIN,
};

/// A background star at a fixed screen position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyStar {
    pub x: i32,
    pub y: i32,
    /// Twinkle phase offset in radians.
    pub phase: f64,
    /// Per-star twinkle speed multiplier.
    pub twinkle_speed: f64,
}

impl SkyStar {
    /// Brightness at clock `t`, in `0.4..=1.0`.
    pub fn brightness(&self, t: f64) -> f64 {
        let phase = self.phase + t * self.twinkle_speed * SKY_TWINKLE_SPEED;
        0.4 + 0.6 * (0.5 * (1.0 + phase.sin()))
    }
}

/// Scatter a fresh set of stars over the band between the top margin and
/// the tree apex.
pub fn regenerate<R: Rng + ?Sized>(rng: &mut R, width: u16, top_y: i32) -> Vec<SkyStar> {
    if top_y <= TREE_TOP_MARGIN || width == 0 {
        return Vec::new();
    }

    let band = (top_y - TREE_TOP_MARGIN).max(1);
    (0..SKY_STAR_COUNT)
        .map(|_| SkyStar {
            x: rng.gen_range(0..i32::from(width)),
            y: TREE_TOP_MARGIN + rng.gen_range(0..band),
            phase: rng.gen_range(0.0..TAU),
            twinkle_speed: rng.gen_range(SKY_STAR_SPEED_MIN..SKY_STAR_SPEED_MAX),
        })
        .collect()
}

/// Sky stars cached per `(width, top_y)`, together with the cells their
/// glow covers.
#[derive(Debug, Default)]
pub struct SkyField {
    stars: Vec<SkyStar>,
    glow_cells: HashSet<(i32, i32)>,
    key: Option<(u16, i32)>,
}

impl SkyField {
    /// Regenerate the stars if the terminal width or the apex row changed.
    ///
    /// Returns whether a regeneration happened.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, width: u16, top_y: i32) -> bool {
        if self.key == Some((width, top_y)) {
            return false;
        }

        self.stars = regenerate(rng, width, top_y);
        self.glow_cells = glow_cells(&self.stars, width, top_y);
        self.key = Some((width, top_y));
        debug!(
            "regenerated {} sky stars for width {width}, top row {top_y}",
            self.stars.len()
        );
        true
    }

    /// Use an explicit star layout for the given key.
    #[cfg(test)]
    pub(crate) fn with_stars(stars: Vec<SkyStar>, width: u16, top_y: i32) -> Self {
        let glow_cells = glow_cells(&stars, width, top_y);
        Self {
            stars,
            glow_cells,
            key: Some((width, top_y)),
        }
    }

    pub fn stars(&self) -> &[SkyStar] {
        &self.stars
    }

    /// Whether a star or its glow owns the cell.
    pub fn covers(&self, x: i32, y: i32) -> bool {
        self.glow_cells.contains(&(x, y))
    }
}

fn glow_cells(stars: &[SkyStar], width: u16, top_y: i32) -> HashSet<(i32, i32)> {
    let in_sky = |x: i32, y: i32| x >= 0 && x < i32::from(width) && y >= 0 && y < top_y;

    let mut cells = HashSet::new();
    for star in stars {
        for dy in -SKY_GLOW_RADIUS..=SKY_GLOW_RADIUS {
            for dx in -SKY_GLOW_RADIUS..=SKY_GLOW_RADIUS {
                let (x, y) = (star.x + dx, star.y + dy);
                if in_sky(x, y) {
                    cells.insert((x, y));
                }
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_degenerate_band_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        // 80x24 puts the apex above the screen.
        assert!(regenerate(&mut rng, 80, -2).is_empty());
        assert!(regenerate(&mut rng, 80, TREE_TOP_MARGIN).is_empty());
        assert!(regenerate(&mut rng, 0, 20).is_empty());
    }

    #[test]
    fn test_stars_within_band() {
        let mut rng = StdRng::seed_from_u64(2);
        let stars = regenerate(&mut rng, 120, 14);
        assert_eq!(stars.len(), SKY_STAR_COUNT);
        for star in &stars {
            assert!((0..120).contains(&star.x));
            assert!((TREE_TOP_MARGIN..14).contains(&star.y));
            assert!((0.0..TAU).contains(&star.phase));
            assert!((0.8..1.6).contains(&star.twinkle_speed));
        }
    }

    #[test]
    fn test_single_row_band() {
        let mut rng = StdRng::seed_from_u64(3);
        let stars = regenerate(&mut rng, 40, TREE_TOP_MARGIN + 1);
        assert_eq!(stars.len(), SKY_STAR_COUNT);
        assert!(stars.iter().all(|s| s.y == TREE_TOP_MARGIN));
    }

    #[test]
    fn test_brightness_range() {
        let star = SkyStar {
            x: 0,
            y: 0,
            phase: 1.3,
            twinkle_speed: 1.1,
        };
        for step in 0..500 {
            let b = star.brightness(step as f64 * 0.06);
            assert!((0.4..=1.0).contains(&b), "brightness {b} out of range");
        }
    }

    #[test]
    fn test_update_is_cached() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut sky = SkyField::default();

        assert!(sky.update(&mut rng, 120, 14));
        let first = sky.stars().to_vec();
        assert!(!sky.update(&mut rng, 120, 14));
        assert_eq!(sky.stars(), first.as_slice());

        assert!(sky.update(&mut rng, 100, 14));
        assert!(sky.update(&mut rng, 100, 10));
    }

    #[test]
    fn test_glow_cells_stay_above_tree() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut sky = SkyField::default();
        sky.update(&mut rng, 60, 8);
        for star in sky.stars() {
            assert!(sky.covers(star.x, star.y));
        }
        for y in 8..12 {
            for x in 0..60 {
                assert!(!sky.covers(x, y));
            }
        }
    }
}
