//! Short-lived trail particles shed by the orbiting light.

use rand::Rng;
use ratatui::style::Color;
use treelight_core::{
    Vector3,
    consts::{
        PARTICLE_FRONT_EXTRA, PARTICLE_INITIAL_LIFE, PARTICLE_LIFE_DECAY, PARTICLE_SPAWN_MAX,
        PARTICLE_SPAWN_MIN,
    },
};

/// A single trail particle in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vector3,
    pub velocity: Vector3,
    pub life: f64,
    pub color: Color,
}

/// The live particle set.
#[derive(Debug, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a handful of particles around the light; more while the light
    /// is in front of the tree. Returns how many were added.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        x: f64,
        y: f64,
        z: f64,
        color: Color,
    ) -> usize {
        let mut count = rng.gen_range(PARTICLE_SPAWN_MIN..=PARTICLE_SPAWN_MAX);
        if z >= 0.0 {
            count += PARTICLE_FRONT_EXTRA;
        }

        self.particles.extend((0..count).map(|_| {
            // Cells are taller than wide, so scatter more horizontally.
            let jitter_x = rng.gen_range(-1.0..1.0);
            let jitter_y = rng.gen_range(-0.5..0.5);
            Particle {
                pos: Vector3::new(x + jitter_x, y + jitter_y, z),
                velocity: Vector3::new(rng.gen_range(-0.1..0.1), rng.gen_range(0.0..0.2), 0.0),
                life: PARTICLE_INITIAL_LIFE,
                color,
            }
        }));
        count
    }

    /// Move every particle one tick and drop the expired ones.
    pub fn advance(&mut self) {
        self.particles.retain_mut(|p| {
            p.pos += p.velocity;
            p.life -= PARTICLE_LIFE_DECAY;
            p.life > 0.0
        });
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.particles.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
