//! Terminal Game of Life
//!
//! This library simulates Conway's Game of Life on a square grid with a
//! permanently dead border and renders each generation to a terminal.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod render;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Cell, GameOfLifeRules, Grid};
pub use simulation::{run_simulation, Simulation, SimulationOutcome, SimulationState};
