//! Layered painting of one frame.
//!
//! Layers are painted back to front; a later layer overwrites an earlier one
//! at the same cell:
//!
//! 1. sky base above the tree apex
//! 2. sky stars and their glow
//! 3. plain sky over every free cell around the tree
//! 4. tree, trunk and gifts, lit by the orbiting light
//! 5. trail particles
//! 6. the light itself, unless it is behind the tree
//!
//! Every write sets glyph, foreground and background together, and any cell
//! outside the frame area is skipped.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier},
    widgets::Widget,
};
use treelight_core::{
    SKY_BASE, TreeLayout,
    consts::{LIGHT_RADIUS, SKY_GLOW_DAMPING, SKY_GLOW_RADIUS},
    sky_glow, sky_star_fg,
};
use treelight_scene::{Scene, SceneKind};

use crate::{orbit::LightState, particles::Particle, sky::SkyField};

/// Glyph of the orbiting light.
pub const LIGHT_GLYPH: char = '★';
/// Glyph of a trail particle.
pub const TRAIL_GLYPH: char = '.';
/// Glyph of a sky star.
pub const SKY_STAR_GLYPH: char = '.';

/// Everything needed to paint one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub scene: &'a Scene,
    pub sky: &'a SkyField,
    pub light: &'a LightState,
    pub particles: &'a [Particle],
    /// Simulation clock, drives the sky twinkle.
    pub t: f64,
}

impl Widget for FrameView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut canvas = Canvas {
            layout: TreeLayout::new(area.width, area.height),
            area,
            buf,
        };

        canvas.paint_sky();
        canvas.paint_sky_stars(self.sky, self.t);
        canvas.paint_fill(self.scene, self.sky);
        canvas.paint_scene(self.scene, self.light);
        canvas.paint_particles(self.particles);
        canvas.paint_light(self.light);
    }
}

/// Distance used for illumination; horizontal gaps count half because
/// terminal cells are about twice as tall as they are wide.
pub fn illumination_distance(dx: f64, dy: f64) -> f64 {
    ((dx * 0.5).powi(2) + dy * dy).sqrt()
}

/// Foreground colour of a scene cell at the given distance from the light.
pub fn lit_color(kind: SceneKind, base: Color, lit: Color, dist: f64) -> Color {
    if dist < LIGHT_RADIUS && kind.is_illuminable() {
        lit
    } else {
        base
    }
}

struct Canvas<'b> {
    layout: TreeLayout,
    area: Rect,
    buf: &'b mut Buffer,
}

impl Canvas<'_> {
    fn put(&mut self, x: i32, y: i32, glyph: char, fg: Color, bg: Color, bold: bool) {
        if !self.layout.contains(x, y) {
            return;
        }
        // `contains` bounds both coordinates by the u16 area size.
        let position = (self.area.x + x as u16, self.area.y + y as u16);
        if let Some(cell) = self.buf.cell_mut(position) {
            cell.set_char(glyph).set_fg(fg).set_bg(bg);
            cell.modifier = if bold { Modifier::BOLD } else { Modifier::empty() };
        }
    }

    fn set_bg(&mut self, x: i32, y: i32, bg: Color) {
        if !self.layout.contains(x, y) {
            return;
        }
        let position = (self.area.x + x as u16, self.area.y + y as u16);
        if let Some(cell) = self.buf.cell_mut(position) {
            cell.set_bg(bg);
        }
    }

    fn blank(&mut self, x: i32, y: i32) {
        self.put(x, y, ' ', SKY_BASE, SKY_BASE, false);
    }

    fn paint_sky(&mut self) {
        let top = self.layout.top_y.min(i32::from(self.layout.height));
        for y in 0..top {
            for x in 0..i32::from(self.layout.width) {
                self.blank(x, y);
            }
        }
    }

    fn paint_sky_stars(&mut self, sky: &SkyField, t: f64) {
        let top_y = self.layout.top_y;
        let radius = f64::from(SKY_GLOW_RADIUS);

        for star in sky.stars() {
            let brightness = star.brightness(t);
            self.put(
                star.x,
                star.y,
                SKY_STAR_GLYPH,
                sky_star_fg(brightness),
                SKY_BASE,
                false,
            );

            // Glow only tints the background so the star glyph survives.
            for dy in -SKY_GLOW_RADIUS..=SKY_GLOW_RADIUS {
                for dx in -SKY_GLOW_RADIUS..=SKY_GLOW_RADIUS {
                    let (x, y) = (star.x + dx, star.y + dy);
                    if y >= top_y {
                        continue;
                    }
                    let dist = f64::from(dx * dx + dy * dy).sqrt();
                    if dist > radius {
                        continue;
                    }
                    let f = (1.0 - dist / radius) * brightness * SKY_GLOW_DAMPING;
                    self.set_bg(x, y, sky_glow(f));
                }
            }
        }
    }

    fn paint_fill(&mut self, scene: &Scene, sky: &SkyField) {
        let TreeLayout {
            mid_x,
            base_y,
            top_y,
            width,
            ..
        } = self.layout;

        for y in top_y.max(0)..=self.layout.fill_bottom() {
            for x in 0..i32::from(width) {
                if scene.occupies(x - mid_x, y - base_y) || sky.covers(x, y) {
                    continue;
                }
                self.blank(x, y);
            }
        }
    }

    fn paint_scene(&mut self, scene: &Scene, light: &LightState) {
        for cell in scene.cells() {
            let (x, y) = self.layout.anchor(cell.offset_x, cell.offset_y);
            if !self.layout.contains(x, y) {
                continue;
            }

            let dist = illumination_distance(
                f64::from(x) - light.screen_x,
                f64::from(y) - light.screen_y,
            );
            let fg = lit_color(cell.kind, cell.base_color, cell.lit_color, dist);
            self.put(x, y, cell.glyph, fg, SKY_BASE, false);
        }
    }

    fn paint_particles(&mut self, particles: &[Particle]) {
        let width = f64::from(self.layout.width);
        let height = f64::from(self.layout.height);

        for p in particles {
            if p.pos.x < 0.0 || p.pos.x >= width || p.pos.y < 0.0 || p.pos.y >= height {
                continue;
            }
            self.put(
                p.pos.x as i32,
                p.pos.y as i32,
                TRAIL_GLYPH,
                p.color,
                SKY_BASE,
                false,
            );
        }
    }

    fn paint_light(&mut self, light: &LightState) {
        if light.is_occluded() {
            return;
        }
        let (x, y) = light.cell();
        self.put(x, y, LIGHT_GLYPH, light.color, SKY_BASE, true);
    }
}
