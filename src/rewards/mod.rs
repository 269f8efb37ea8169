//! Procedural content: encounters, equipment, loot, quests, and cutscenes.

pub mod cinematics;
pub mod equipment;
pub mod items;
pub mod monsters;
pub mod quests;

pub use cinematics::*;
pub use equipment::*;
pub use items::*;
pub use monsters::*;
pub use quests::*;
