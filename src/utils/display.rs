//! Display and output formatting utilities

use crate::simulation::{SimulationOutcome, SimulationState};
use anyhow::{Context, Result};
use crossterm::style::Stylize;

/// Format finished runs for the console
pub struct OutcomeFormatter;

impl OutcomeFormatter {
    /// One status line describing how the run ended
    pub fn format_text(outcome: &SimulationOutcome, style: StatusStyle) -> String {
        let plural = if outcome.generations == 1 { "" } else { "s" };
        match outcome.final_state {
            SimulationState::Stable => style.success(&format!(
                "Stable after {} generation{} with {} living cells",
                outcome.generations, plural, outcome.living_cells
            )),
            SimulationState::Extinct => style.warning(&format!(
                "Extinct after {} generation{}",
                outcome.generations, plural
            )),
            SimulationState::Running => outcome.final_state.to_string(),
        }
    }

    pub fn format_json(outcome: &SimulationOutcome) -> Result<String> {
        serde_json::to_string_pretty(outcome).context("Failed to serialize simulation outcome")
    }
}

/// Colors console status lines, or leaves them plain when color is off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    color: bool,
}

impl StatusStyle {
    /// `NO_COLOR` in the environment turns color off regardless of `color`
    pub fn new(color: bool) -> Self {
        Self {
            color: color && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn success(self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn warning(self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }
}
