//! Configuration settings for the simulation and the terminal renderer

use crate::error::SettingsError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Largest accepted grid side; the grid is drawn one row per terminal line
pub const MAX_GRID_SIZE: usize = 1024;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Height and width of the square grid, border included
    pub size: usize,
    /// Likelihood of each interior cell starting alive
    pub probability: f64,
    /// Pause between rendered frames
    pub delay_ms: u64,
    /// Fixed seed for a reproducible starting grid
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub alive_glyph: char,
    pub dead_glyph: char,
    pub color: bool,
    pub clear_screen: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            size: 10,
            probability: 0.7,
            delay_ms: 500,
            seed: None,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            alive_glyph: '*',
            dead_glyph: ' ',
            color: true,
            clear_screen: true,
        }
    }
}

impl SimulationConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.simulation.size == 0 {
            return Err(SettingsError::InvalidSize(self.simulation.size));
        }
        if self.simulation.size > MAX_GRID_SIZE {
            return Err(SettingsError::SizeTooLarge {
                size: self.simulation.size,
                max: MAX_GRID_SIZE,
            });
        }

        let probability = self.simulation.probability;
        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(SettingsError::InvalidProbability(probability));
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(size) = cli_overrides.size {
            self.simulation.size = size;
        }
        if let Some(probability) = cli_overrides.probability {
            self.simulation.probability = probability;
        }
        if let Some(delay_ms) = cli_overrides.delay_ms {
            self.simulation.delay_ms = delay_ms;
        }
        if cli_overrides.seed.is_some() {
            self.simulation.seed = cli_overrides.seed;
        }
        if cli_overrides.no_color {
            self.render.color = false;
        }
        if cli_overrides.no_clear {
            self.render.clear_screen = false;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub size: Option<usize>,
    pub probability: Option<f64>,
    pub delay_ms: Option<u64>,
    pub seed: Option<u64>,
    pub no_color: bool,
    pub no_clear: bool,
}
