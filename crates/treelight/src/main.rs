use std::time::Instant;

use color_eyre::eyre::WrapErr;
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{DefaultTerminal, Frame};
use treelight_core::consts::TICK;
use treelight_render::Simulation;

mod input;
mod logging;
mod shutdown;
mod signals;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init();
    let terminal = ratatui::try_init().wrap_err("failed to initialize terminal")?;
    let result = App::new(StdRng::from_entropy()).run(terminal);
    ratatui::restore();
    result
}

/// The main application which owns the simulation and drives the frame loop.
#[derive(Debug)]
pub struct App {
    simulation: Simulation,
}

impl App {
    /// Construct a new instance of [`App`] drawing randomness from `rng`.
    pub fn new(rng: StdRng) -> Self {
        Self {
            simulation: Simulation::new(rng),
        }
    }

    /// Run the application's main loop until a shutdown is requested.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let (sender, receiver) = shutdown::channel();
        input::spawn(sender.clone()).wrap_err("failed to start input thread")?;
        signals::spawn(sender);
        info!("render loop started");

        let mut next_frame = Instant::now();
        loop {
            let wait = next_frame.saturating_duration_since(Instant::now());
            if let Some(reason) = receiver.wait(wait) {
                info!("shutting down: {reason}");
                break;
            }

            terminal
                .draw(|frame| self.render(frame))
                .wrap_err("failed to draw frame")?;

            // Skip missed frames instead of bursting to catch up.
            next_frame += TICK;
            let now = Instant::now();
            if next_frame < now {
                next_frame = now;
            }
        }
        Ok(())
    }

    /// Advance the simulation one tick and paint it.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let view = self.simulation.tick(area.width, area.height);
        frame.render_widget(view, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, style::Modifier};

    #[test]
    fn test_render_large_terminal() {
        let mut app = App::new(StdRng::seed_from_u64(1));
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        assert_ne!(buffer[(60, 14)].symbol(), " ");
        assert_eq!(buffer[(60, 14)].bg, treelight_core::SKY_BASE);
        assert_eq!(buffer[(0, 0)].bg, treelight_core::SKY_BASE);
    }

    #[test]
    fn test_light_visibility_matches_depth() {
        let mut app = App::new(StdRng::seed_from_u64(2));
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        for _ in 0..40 {
            terminal.draw(|frame| app.render(frame)).unwrap();
            let light = *app.simulation.light().unwrap();
            let (x, y) = light.cell();
            let cell = &terminal.backend().buffer()[(x as u16, y as u16)];
            let drawn = cell.symbol() == "★" && cell.modifier.contains(Modifier::BOLD);
            assert_eq!(drawn, !light.is_occluded());
        }
    }

    #[test]
    fn test_render_tiny_terminal() {
        let mut app = App::new(StdRng::seed_from_u64(3));
        for (w, h) in [(1, 1), (5, 3), (80, 24), (30, 60)] {
            let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
            terminal.draw(|frame| app.render(frame)).unwrap();
        }
    }
}
