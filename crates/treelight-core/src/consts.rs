//! Compile-time tuning for the scene, the orbit and the sky.

use std::time::Duration;

/// Rows between the top of the screen and the sky-star band.
pub const TREE_TOP_MARGIN: i32 = 3;
/// Canopy height in rows.
pub const TREE_HEIGHT: i32 = 22;
/// Canopy half-width at its base.
pub const TREE_BASE_WIDTH: i32 = 30;
/// Rows kept free below the canopy base for the trunk and gifts.
pub const BASE_BOTTOM_MARGIN: i32 = 4;
/// Rows below the canopy base that are repainted with sky every frame.
pub const FILL_BELOW_BASE: i32 = 4;

/// Trunk size in cells.
pub const TRUNK_WIDTH: i32 = 5;
pub const TRUNK_HEIGHT: i32 = 4;

/// Probability that a canopy cell becomes an ornament.
pub const ORNAMENT_CHANCE: f64 = 0.10;
/// Probability that a non-ornament canopy cell becomes a light bulb.
pub const BULB_CHANCE: f64 = 0.03;

/// Frequency of the light's up and down motion.
pub const VERTICAL_SPEED: f64 = 0.5;
/// Angular speed of the orbit, in radians per clock unit.
pub const ORBIT_ANGULAR_SPEED: f64 = 3.0;
/// Horizontal stretch applied to projected X to compensate for tall cells.
pub const ASPECT_STRETCH: f64 = 2.0;
/// Hue degrees advanced per clock unit.
pub const HUE_SPEED: f64 = 20.0;
/// Clock advance per tick.
pub const TIME_STEP: f64 = 0.06;
/// Aspect-corrected distance within which needles and trunk light up.
pub const LIGHT_RADIUS: f64 = 8.0;

/// Frame interval (25 frames per second).
pub const TICK: Duration = Duration::from_millis(40);

pub const PARTICLE_INITIAL_LIFE: f64 = 1.2;
pub const PARTICLE_LIFE_DECAY: f64 = 0.05;
/// Extra particles spawned while the light is in front of the tree.
pub const PARTICLE_FRONT_EXTRA: usize = 1;
/// Inclusive range of the base particle count per tick.
pub const PARTICLE_SPAWN_MIN: usize = 2;
pub const PARTICLE_SPAWN_MAX: usize = 4;

pub const SKY_STAR_COUNT: usize = 8;
/// Glow radius around each sky star, in cells.
pub const SKY_GLOW_RADIUS: i32 = 2;
/// Damping applied to the glow tint.
pub const SKY_GLOW_DAMPING: f64 = 0.6;
pub const SKY_TWINKLE_SPEED: f64 = 1.2;
/// Range of the per-star twinkle speed multiplier.
pub const SKY_STAR_SPEED_MIN: f64 = 0.8;
pub const SKY_STAR_SPEED_MAX: f64 = 1.6;
