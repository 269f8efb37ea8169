//! Simulation primitives and the tick engine.

pub mod bar;
pub mod constants;
pub mod dice;
pub mod game_loop;
pub mod signal;
pub mod task;
pub mod tick;

pub use bar::*;
pub use constants::*;
pub use dice::*;
pub use game_loop::*;
pub use signal::*;
pub use task::*;
pub use tick::*;
