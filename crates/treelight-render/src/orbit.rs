//! The light orbiting the tree on a conic spiral.

use ratatui::style::Color;
use treelight_core::{
    TreeLayout, Vector3,
    consts::{
        ASPECT_STRETCH, HUE_SPEED, ORBIT_ANGULAR_SPEED, TREE_BASE_WIDTH, TREE_HEIGHT,
        VERTICAL_SPEED,
    },
    hsv_to_rgb,
};

/// Where the light is this tick and what colour it has.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightState {
    /// Position relative to the tree axis. `y` is the depth below the apex
    /// in rows; `z > 0` is in front of the tree.
    pub relative: Vector3,
    pub screen_x: f64,
    pub screen_y: f64,
    pub color: Color,
}

impl LightState {
    /// Behind the tree the light glyph is hidden.
    pub fn is_occluded(&self) -> bool {
        self.relative.z < 0.0
    }

    /// Screen cell the light glyph is drawn in.
    pub fn cell(&self) -> (i32, i32) {
        (self.screen_x.round() as i32, self.screen_y.round() as i32)
    }
}

/// Vertical progress down the canopy, kept inside `0.05..=0.95`.
pub fn clamped_progress(t: f64) -> f64 {
    let progress = ((t * VERTICAL_SPEED).sin() + 1.0) / 2.0;
    0.05 + progress * 0.9
}

/// Orbit radius for a given progress; widens towards the base.
pub fn orbit_radius(progress: f64) -> f64 {
    2.0 + progress * f64::from(TREE_BASE_WIDTH / 2 + 2)
}

/// Hue of the light at clock `t`, in whole degrees.
pub fn hue(t: f64) -> f64 {
    (t * HUE_SPEED).floor().rem_euclid(360.0)
}

/// Compute the light for clock `t` on the given layout.
pub fn step(t: f64, layout: &TreeLayout) -> LightState {
    let progress = clamped_progress(t);
    let radius = orbit_radius(progress);
    let angle = t * ORBIT_ANGULAR_SPEED;
    let depth = progress * f64::from(TREE_HEIGHT);

    let relative = Vector3::new(angle.cos() * radius, depth, angle.sin() * radius);

    LightState {
        relative,
        screen_x: f64::from(layout.mid_x) + relative.x * ASPECT_STRETCH,
        screen_y: f64::from(layout.top_y) + depth,
        color: hsv_to_rgb(hue(t), 1.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_and_radius_bounds() {
        for i in 0..5000 {
            let t = i as f64 * 0.037 - 50.0;
            let progress = clamped_progress(t);
            assert!((0.05..=0.95).contains(&progress), "progress {progress} at t={t}");
            assert!(orbit_radius(progress) >= 2.0);
        }
    }

    #[test]
    fn test_step_at_origin() {
        let layout = TreeLayout::new(120, 40);
        let light = step(0.0, &layout);

        // sin(0) = 0 -> progress 0.5, radius 2 + 0.5 * 17.
        assert!((light.relative.x - 10.5).abs() < 1e-9);
        assert!(light.relative.z.abs() < 1e-9);
        assert!((light.screen_x - 81.0).abs() < 1e-9);
        assert!((light.screen_y - 25.0).abs() < 1e-9);
        assert_eq!(light.color, Color::Rgb(255, 0, 0));
        assert_eq!(light.cell(), (81, 25));
        assert!(!light.is_occluded());
    }

    #[test]
    fn test_light_stays_inside_canopy_rows() {
        let layout = TreeLayout::new(120, 40);
        for i in 0..1000 {
            let light = step(i as f64 * 0.06, &layout);
            assert!(light.screen_y >= f64::from(layout.top_y));
            assert!(light.screen_y <= f64::from(layout.base_y));
        }
    }

    #[test]
    fn test_hue_cycles() {
        assert_eq!(hue(0.0), 0.0);
        assert_eq!(hue(6.0), 120.0);
        assert_eq!(hue(18.0), 0.0);
        assert_eq!(hue(18.06), 1.0);
    }

    #[test]
    fn test_occlusion_boundary() {
        let mut light = step(0.0, &TreeLayout::new(120, 40));
        light.relative.z = -0.001;
        assert!(light.is_occluded());
        light.relative.z = 0.0;
        assert!(!light.is_occluded());
    }
}
