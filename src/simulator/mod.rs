//! Batch harness: run a character to a target level without a UI.
//!
//! The runner drives the same [`Simulation`](crate::core::tick::Simulation)
//! an interactive front-end would, so results match real play.

mod config;
mod report;
mod runner;

pub use config::{DiceMode, SimConfig};
pub use report::{character_sheet, LevelMark, SimReport};
pub use runner::{run_simulation, simulate_player};
