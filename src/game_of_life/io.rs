//! Pattern file loading for Game of Life grids

use super::Grid;
use crate::error::GridError;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a starting pattern from a text file
/// Format: Each line represents a row, with '1' for alive cells and '0' for dead cells
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    let grid = parse_grid_from_string(&content)
        .with_context(|| format!("Failed to parse pattern file: {}", path.as_ref().display()))?;
    Ok(grid)
}

/// Parse a grid from a string representation
pub fn parse_grid_from_string(content: &str) -> Result<Grid, GridError> {
    let rows = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(row, line)| {
            line.chars()
                .enumerate()
                .map(|(col, ch)| match ch {
                    '0' => Ok(false),
                    '1' => Ok(true),
                    _ => Err(GridError::InvalidCharacter { ch, row, col }),
                })
                .collect::<Result<Vec<bool>, GridError>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Grid::from_rows(rows)
}

/// Convert a grid to string representation
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.size() * (grid.size() + 1));

    for row in grid.rows() {
        for cell in row {
            result.push(if cell.is_alive() { '1' } else { '0' });
        }
        result.push('\n');
    }

    result
}
