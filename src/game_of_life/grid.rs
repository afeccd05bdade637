//! Grid representation and utilities for Game of Life

use crate::error::GridError;
use itertools::Itertools;
use rand::Rng;
use std::fmt;

/// State of a single grid position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// Square Game of Life grid whose outer ring is permanently dead
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell dead
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
        }
    }

    /// Create a grid whose interior cells are each alive with `probability`
    pub fn random<R: Rng + ?Sized>(size: usize, probability: f64, rng: &mut R) -> Self {
        Self::from_interior_fn(size, |_, _| Cell::from(rng.gen::<f64>() < probability))
    }

    /// Create a grid whose interior cells are produced by `cell_at`, visited
    /// row-major. The border is never passed to `cell_at`.
    pub fn from_interior_fn<F>(size: usize, mut cell_at: F) -> Self
    where
        F: FnMut(usize, usize) -> Cell,
    {
        let mut grid = Self::new(size);
        let inner = 1..size.saturating_sub(1);
        for (row, col) in inner.clone().cartesian_product(inner) {
            let idx = grid.index(row, col);
            grid.cells[idx] = cell_at(row, col);
        }
        grid
    }

    /// Create a grid from square rows of booleans
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        if rows.is_empty() {
            return Err(GridError::Empty);
        }

        let size = rows.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(GridError::NotSquare { row, len: cells.len(), expected: size });
            }
        }

        let mut grid = Self::new(size);
        for (row, cells) in rows.into_iter().enumerate() {
            for (col, alive) in cells.into_iter().enumerate() {
                grid.set(row, col, Cell::from(alive))?;
            }
        }
        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Get cell state at coordinates; anything off the grid is dead
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row < self.size && col < self.size {
            self.cells[self.index(row, col)]
        } else {
            Cell::Dead
        }
    }

    /// Set an interior cell
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        if row >= self.size || col >= self.size {
            return Err(GridError::OutOfBounds { row, col, size: self.size });
        }
        if self.is_border(row, col) {
            if cell.is_alive() {
                return Err(GridError::BorderCell { row, col });
            }
            return Ok(());
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        Ok(())
    }

    pub fn is_border(&self, row: usize, col: usize) -> bool {
        let last = self.size.saturating_sub(1);
        row == 0 || col == 0 || row == last || col == last
    }

    /// Coordinates of every cell that is allowed to evolve, row-major
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize)> {
        let inner = 1..self.size.saturating_sub(1);
        inner.clone().cartesian_product(inner)
    }

    /// Count the live cells among the eight neighbors of an interior cell
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for dr in [-1isize, 0, 1] {
            for dc in [-1isize, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }

                let r = row as isize + dr;
                let c = col as isize + dc;
                if r < 0 || c < 0 {
                    continue;
                }
                if self.get(r as usize, c as usize).is_alive() {
                    count += 1;
                }
            }
        }

        count
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        (0..self.size)
            .cartesian_product(0..self.size)
            .filter(|&(row, col)| self.get(row, col).is_alive())
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// True when no cell is alive
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                let symbol = if cell.is_alive() { '█' } else { '·' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
