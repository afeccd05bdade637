//! Typed errors for grid construction and settings validation

use thiserror::Error;

/// Errors raised while building or mutating a grid
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid cannot be empty")]
    Empty,

    #[error("grid must be square: row {row} has length {len}, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },

    #[error("coordinates ({row}, {col}) out of bounds for {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("border cell ({row}, {col}) must stay dead")]
    BorderCell { row: usize, col: usize },

    #[error("invalid character '{ch}' at position ({row}, {col}); only '0' and '1' are allowed")]
    InvalidCharacter { ch: char, row: usize, col: usize },
}

/// Errors raised by [`Settings::validate`](crate::config::Settings::validate)
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("grid size must be at least 1, got {0}")]
    InvalidSize(usize),

    #[error("grid size must be at most {max}, got {size}")]
    SizeTooLarge { size: usize, max: usize },

    #[error("alive probability must be between 0.0 and 1.0, got {0}")]
    InvalidProbability(f64),
}
