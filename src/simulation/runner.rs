//! Simulation state machine

use crate::game_of_life::{GameOfLifeRules, Grid};
use crate::render::Renderer;
use anyhow::Result;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationState {
    Running,
    /// The last generation was identical to the one before it
    Stable,
    /// No cell is alive
    Extinct,
}

impl SimulationState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SimulationState::Running)
    }
}

impl fmt::Display for SimulationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SimulationState::Running => "running",
            SimulationState::Stable => "stable",
            SimulationState::Extinct => "extinct",
        };
        f.write_str(name)
    }
}

/// How a finished run ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationOutcome {
    pub final_state: SimulationState,
    /// Number of generations computed after the initial grid
    pub generations: usize,
    pub living_cells: usize,
}

/// Drives one grid through successive generations.
///
/// Only period-1 repeats and extinction end a run; oscillators such as
/// the blinker keep it going indefinitely.
pub struct Simulation {
    current: Grid,
    generation: usize,
    state: SimulationState,
    delay: Duration,
}

impl Simulation {
    pub fn new(initial: Grid, delay: Duration) -> Self {
        Self {
            current: initial,
            generation: 0,
            state: SimulationState::Running,
            delay,
        }
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Advance by one generation and report the resulting state.
    ///
    /// A stable result leaves the current grid and generation counter as they
    /// were. Ticking a finished simulation does nothing.
    pub fn step(&mut self) -> SimulationState {
        if self.state.is_terminal() {
            return self.state;
        }

        let next = GameOfLifeRules::next_generation(&self.current);
        if next == self.current {
            self.state = SimulationState::Stable;
            return self.state;
        }

        self.current = next;
        self.generation += 1;
        if self.current.is_extinct() {
            self.state = SimulationState::Extinct;
        }

        debug!(
            generation = self.generation,
            living = self.current.living_count(),
            "advanced generation"
        );
        self.state
    }

    /// Render the initial grid, then every new generation until a terminal state
    pub fn run<R: Renderer + ?Sized>(mut self, renderer: &mut R) -> Result<SimulationOutcome> {
        renderer.render(&self.current, self.generation)?;

        loop {
            match self.step() {
                SimulationState::Stable => break,
                state => {
                    renderer.render(&self.current, self.generation)?;
                    if state == SimulationState::Extinct {
                        break;
                    }
                    if !self.delay.is_zero() {
                        std::thread::sleep(self.delay);
                    }
                }
            }
        }

        let outcome = self.outcome();
        info!(
            state = %outcome.final_state,
            generations = outcome.generations,
            living = outcome.living_cells,
            "simulation finished"
        );
        Ok(outcome)
    }

    pub fn outcome(&self) -> SimulationOutcome {
        SimulationOutcome {
            final_state: self.state,
            generations: self.generation,
            living_cells: self.current.living_count(),
        }
    }
}
