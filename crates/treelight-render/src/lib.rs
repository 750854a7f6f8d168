//! Per-frame rendering for the treelight animation.
//!
//! [`Simulation`] owns everything that changes between frames: the clock,
//! the particle trail, the cached sky layout and the random generator. Each
//! tick it advances the orbiting light and hands out a [`FrameView`], a
//! ratatui widget that composites sky, tree, trail and light into a buffer.

pub mod compositor;
pub mod orbit;
pub mod particles;
pub mod sky;
mod state;

pub use compositor::FrameView;
pub use orbit::LightState;
pub use particles::{Particle, ParticleSystem};
pub use sky::{SkyField, SkyStar};
pub use state::Simulation;
