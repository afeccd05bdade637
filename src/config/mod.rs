//! Configuration management for the terminal Game of Life

pub mod settings;

pub use settings::{CliOverrides, MAX_GRID_SIZE, RenderConfig, Settings, SimulationConfig};
