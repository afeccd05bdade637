//! Console helpers shared by the binary

pub mod display;

pub use display::{OutcomeFormatter, StatusStyle};
