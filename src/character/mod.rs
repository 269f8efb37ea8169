//! The character sheet: stats, belongings, spells, quests, and creation.

pub mod creation;
pub mod equipment;
pub mod inventory;
pub mod player;
pub mod quest_book;
pub mod spell_book;
pub mod stats;

pub use creation::*;
pub use equipment::*;
pub use inventory::*;
pub use player::*;
pub use quest_book::*;
pub use spell_book::*;
pub use stats::*;
