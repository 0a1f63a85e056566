//! Puzzle runner for polypack
//!
//! This crate provides:
//! - A parser for the puzzle text format (present catalog plus space lines)
//! - A concurrent driver testing every space on a worker pool
//! - Result recording with JSON export

mod parser;
mod result;
mod runner;

pub use parser::{ParseError, Puzzle, PuzzleParser};
pub use result::{RunSummary, SpaceResult};
pub use runner::{Runner, RunnerConfig};
