//! Static reference data consumed by every generator.

pub mod classes;
pub mod gear;
pub mod items;
pub mod monsters;

pub use classes::*;
pub use gear::*;
pub use items::*;
pub use monsters::*;
