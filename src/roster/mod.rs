//! Saved characters and their on-disk format.

pub mod error;
pub mod store;

pub use error::*;
pub use store::*;
