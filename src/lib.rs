//! pqsim - an idle role-playing simulator library.
//!
//! A character advances on its own through generated tasks: killing
//! monsters, trading loot, and following a procedurally generated plot.
//! Drivers call [`Simulation::tick`](crate::core::tick::Simulation::tick)
//! on a cadence of their choosing and observe progress through per-entity
//! signals.

pub mod character;
pub mod content;
pub mod core;
pub mod lingo;
pub mod rewards;
pub mod roster;
pub mod simulator;
