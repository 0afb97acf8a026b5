//! Core operations.
//!
//! The work behind each command, separated from argument parsing and
//! report rendering.

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::{GenerateOptions, generate};
