//! Command line entry point for the terminal Game of Life

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use terminal_life::{
    config::{CliOverrides, Settings},
    game_of_life::load_grid_from_file,
    render::TerminalRenderer,
    simulation::{run_simulation, Simulation},
    utils::{OutcomeFormatter, StatusStyle},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "terminal_life")]
#[command(about = "Conway's Game of Life in the terminal")]
#[command(version = "0.1.0")]
struct Cli {
    /// Height and width of the grid, border included
    size: Option<usize>,

    /// Likelihood of each interior cell starting alive (0.0 to 1.0)
    probability: Option<f64>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start from a pattern file of '0' and '1' rows instead of a random grid
    #[arg(short, long, conflicts_with_all = ["size", "probability", "seed"])]
    pattern: Option<PathBuf>,

    /// Seed for the random starting grid
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between frames in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Draw live cells without color
    #[arg(long)]
    no_color: bool,

    /// Keep previous frames on screen
    #[arg(long)]
    no_clear: bool,

    /// How to report the final state
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    summary: SummaryFormat,

    /// Write the effective settings to this file and exit
    #[arg(long)]
    write_config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SummaryFormat {
    Text,
    Json,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            size: self.size,
            probability: self.probability,
            delay_ms: self.delay_ms,
            seed: self.seed,
            no_color: self.no_color,
            no_clear: self.no_clear,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = load_settings(&cli)?;

    if let Some(path) = &cli.write_config {
        return write_config_command(&settings, path);
    }

    run_command(&cli, settings)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) if path.exists() => Settings::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        Some(path) => {
            warn!(path = %path.display(), "config file not found, using defaults");
            eprintln!("{}", StatusStyle::new(!cli.no_color).warning(&format!(
                "Config file {} not found, using defaults", path.display()
            )));
            Settings::default()
        }
        None => Settings::default(),
    };

    settings.merge_with_cli(&cli.overrides());
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn write_config_command(settings: &Settings, path: &Path) -> Result<()> {
    settings.to_file(path)?;
    println!("{}", StatusStyle::new(settings.render.color).success(&format!(
        "Wrote configuration to {}", path.display()
    )));
    Ok(())
}

fn run_command(cli: &Cli, settings: Settings) -> Result<()> {
    info!(
        size = settings.simulation.size,
        probability = settings.simulation.probability,
        delay_ms = settings.simulation.delay_ms,
        "starting simulation"
    );

    let mut renderer = TerminalRenderer::stdout(settings.render.clone());
    let outcome = match &cli.pattern {
        Some(path) => {
            let grid = load_grid_from_file(path)?;
            Simulation::new(grid, settings.simulation.delay()).run(&mut renderer)?
        }
        None => run_simulation(&settings, &mut renderer)?,
    };

    match cli.summary {
        SummaryFormat::Text => {
            let style = StatusStyle::new(settings.render.color);
            println!("{}", OutcomeFormatter::format_text(&outcome, style));
        }
        SummaryFormat::Json => println!("{}", OutcomeFormatter::format_json(&outcome)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use terminal_life::simulation::{SimulationOutcome, SimulationState};

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["terminal_life"]).unwrap();
        assert_eq!(cli.size, None);
        assert_eq!(cli.probability, None);
        assert_eq!(cli.summary, SummaryFormat::Text);

        let cli = Cli::try_parse_from(["terminal_life", "20"]).unwrap();
        assert_eq!(cli.size, Some(20));
        assert_eq!(cli.probability, None);

        let cli = Cli::try_parse_from([
            "terminal_life", "20", "0.3", "--seed", "5", "--summary", "json",
        ])
        .unwrap();
        assert_eq!(cli.size, Some(20));
        assert_eq!(cli.probability, Some(0.3));
        assert_eq!(cli.seed, Some(5));
        assert_eq!(cli.summary, SummaryFormat::Json);
    }

    #[test]
    fn test_cli_rejects_malformed_arguments() {
        assert!(Cli::try_parse_from(["terminal_life", "ten"]).is_err());
        assert!(Cli::try_parse_from(["terminal_life", "10", "lots"]).is_err());
        assert!(Cli::try_parse_from(["terminal_life", "10", "0.5", "extra"]).is_err());
    }

    #[test]
    fn test_positional_arguments_override_defaults() {
        let cli = Cli::try_parse_from(["terminal_life", "15", "0.2", "--no-color"]).unwrap();
        let settings = load_settings(&cli).unwrap();
        assert_eq!(settings.simulation.size, 15);
        assert_eq!(settings.simulation.probability, 0.2);
        assert!(!settings.render.color);
        assert!(settings.render.clear_screen);
    }

    #[test]
    fn test_pattern_conflicts_with_random_seeding_arguments() {
        assert!(Cli::try_parse_from(["terminal_life", "--pattern", "glider.txt"]).is_ok());
        assert!(Cli::try_parse_from(["terminal_life", "--pattern", "glider.txt", "--delay-ms", "0"]).is_ok());

        assert!(Cli::try_parse_from(["terminal_life", "20", "--pattern", "glider.txt"]).is_err());
        assert!(Cli::try_parse_from(["terminal_life", "20", "0.5", "-p", "glider.txt"]).is_err());
        assert!(Cli::try_parse_from(["terminal_life", "--seed", "3", "-p", "glider.txt"]).is_err());
    }

    #[test]
    fn test_no_color_gives_plain_summary() {
        let cli = Cli::try_parse_from(["terminal_life", "--no-color"]).unwrap();
        let settings = load_settings(&cli).unwrap();
        let outcome = SimulationOutcome {
            final_state: SimulationState::Stable,
            generations: 2,
            living_cells: 4,
        };

        let text = OutcomeFormatter::format_text(&outcome, StatusStyle::new(settings.render.color));
        assert_eq!(text, "Stable after 2 generations with 4 living cells");
    }

    #[test]
    fn test_oversized_grid_fails_validation() {
        let cli = Cli::try_parse_from(["terminal_life", "5000000"]).unwrap();
        let err = load_settings(&cli).unwrap_err();
        assert!(format!("{:#}", err).contains("at most"));
    }

    #[test]
    fn test_out_of_range_probability_fails() {
        let cli = Cli::try_parse_from(["terminal_life", "10", "1.5"]).unwrap();
        assert!(load_settings(&cli).is_err());
    }

    #[test]
    fn test_write_config_then_load_it() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/life.yaml");

        let cli = Cli::try_parse_from(["terminal_life", "12", "--delay-ms", "50"]).unwrap();
        let settings = load_settings(&cli).unwrap();
        write_config_command(&settings, &path).unwrap();
        assert!(path.exists());

        let path_arg = path.to_string_lossy().to_string();
        let cli = Cli::try_parse_from(["terminal_life", "--config", path_arg.as_str()]).unwrap();
        let loaded = load_settings(&cli).unwrap();
        assert_eq!(loaded.simulation.size, 12);
        assert_eq!(loaded.simulation.delay_ms, 50);
    }

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("absent.yaml");
        let path_arg = path.to_string_lossy().to_string();

        let cli = Cli::try_parse_from(["terminal_life", "-c", path_arg.as_str()]).unwrap();
        assert_eq!(load_settings(&cli).unwrap(), Settings::default());
    }
}
