//! Generation loop with stability and extinction detection

pub mod runner;

pub use runner::{Simulation, SimulationOutcome, SimulationState};

use crate::config::Settings;
use crate::game_of_life::Grid;
use crate::render::Renderer;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Build the random source for seeding, fixed when the settings carry a seed
pub fn seeded_rng(settings: &Settings) -> StdRng {
    match settings.simulation.seed {
        Some(seed) => {
            debug!(seed, "using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// Seed a random grid from the settings and run it to a terminal state
pub fn run_simulation<R: Renderer + ?Sized>(
    settings: &Settings,
    renderer: &mut R,
) -> Result<SimulationOutcome> {
    settings.validate()?;

    let mut rng = seeded_rng(settings);
    let grid = Grid::random(settings.simulation.size, settings.simulation.probability, &mut rng);

    Simulation::new(grid, settings.simulation.delay()).run(renderer)
}
