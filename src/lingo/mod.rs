//! Text generation: names, grammar, numerals, and time spans.

pub mod grammar;
pub mod names;
pub mod numerals;

pub use grammar::*;
pub use names::*;
pub use numerals::*;
