//! Simulation state threaded through the render loop.

use log::debug;
use rand::{Rng, rngs::StdRng};
use treelight_core::{TreeLayout, consts::TIME_STEP};
use treelight_scene::Scene;

use crate::{
    compositor::FrameView,
    orbit::{self, LightState},
    particles::ParticleSystem,
    sky::SkyField,
};

/// Everything that persists between frames.
///
/// The scene is built once from the generator passed to [`Simulation::new`];
/// the same generator then drives sky layout and particle spawning, so a
/// seeded generator gives reproducible frames.
#[derive(Debug)]
pub struct Simulation<R = StdRng> {
    rng: R,
    scene: Scene,
    sky: SkyField,
    particles: ParticleSystem,
    /// Light of the last tick; `None` until the first tick.
    light: Option<LightState>,
    /// Simulation clock.
    t: f64,
}

impl<R: Rng> Simulation<R> {
    /// Build the scene and start the clock at zero.
    pub fn new(mut rng: R) -> Self {
        let scene = Scene::build(&mut rng);
        debug!("built scene with {} cells", scene.cells().len());
        Self {
            rng,
            scene,
            sky: SkyField::default(),
            particles: ParticleSystem::new(),
            light: None,
            t: 0.0,
        }
    }

    /// Advance one tick for a terminal of the given size and return the
    /// frame to paint.
    pub fn tick(&mut self, width: u16, height: u16) -> FrameView<'_> {
        let layout = TreeLayout::new(width, height);
        self.sky.update(&mut self.rng, width, layout.top_y);

        self.t += TIME_STEP;
        let light = orbit::step(self.t, &layout);
        self.particles.spawn(
            &mut self.rng,
            light.screen_x,
            light.screen_y,
            light.relative.z,
            light.color,
        );
        self.particles.advance();

        let light = self.light.insert(light);
        FrameView {
            scene: &self.scene,
            sky: &self.sky,
            light,
            particles: self.particles.particles(),
            t: self.t,
        }
    }

    /// The frame of the last tick without advancing, or `None` before the
    /// first tick.
    pub fn view(&self) -> Option<FrameView<'_>> {
        let light = self.light.as_ref()?;
        Some(FrameView {
            scene: &self.scene,
            sky: &self.sky,
            light,
            particles: self.particles.particles(),
            t: self.t,
        })
    }

    /// Light of the last tick.
    pub fn light(&self) -> Option<&LightState> {
        self.light.as_ref()
    }

    #[cfg(test)]
    fn clock(&self) -> f64 {
        self.t
    }

    #[cfg(test)]
    fn scene(&self) -> &Scene {
        &self.scene
    }
}
