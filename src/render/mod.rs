//! Frame output for the simulation loop

pub mod terminal;

pub use terminal::TerminalRenderer;

use crate::game_of_life::Grid;
use anyhow::Result;

/// Consumes generations produced by the simulation loop.
///
/// Implementations must finish drawing before returning and must not
/// depend on anything but the grid they are handed.
pub trait Renderer {
    fn render(&mut self, grid: &Grid, generation: usize) -> Result<()>;
}
