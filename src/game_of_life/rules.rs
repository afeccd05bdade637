//! Game of Life rules implementation (B3/S23 on a dead-bordered grid)

use super::grid::{Cell, Grid};

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Compute the next generation as a brand-new grid of the same size.
    /// Border cells are never evaluated and stay dead.
    pub fn next_generation(current: &Grid) -> Grid {
        Grid::from_interior_fn(current.size(), |row, col| {
            let neighbors = current.count_live_neighbors(row, col);
            Self::next_state(current.get(row, col), neighbors)
        })
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::next_generation(&grid);
        }
        grid
    }

    /// State of a cell in the next generation given its current state and neighbor count
    pub fn next_state(current: Cell, neighbor_count: u8) -> Cell {
        match (current, neighbor_count) {
            (Cell::Alive, 2) | (Cell::Alive, 3) | (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
