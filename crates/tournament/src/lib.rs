//! Tournament Runner for Reversi engines
//!
//! This crate provides infrastructure for:
//! - Running matches between engines through the game controller
//! - Building engines from short spec strings (`random`, `alphabeta:4`, ...)
//! - Saving match results as JSON and printing reports
//!
//! # Usage
//!
//! ```bash
//! # Alpha-beta at difficulty 4 against the random baseline
//! cargo run -p tournament -- match alphabeta:4 random --games 20
//!
//! # Print the default search configuration as TOML
//! cargo run -p tournament -- config > engine.toml
//! ```

mod engines;
mod error;
mod match_runner;
mod results;

pub use engines::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
