//! Simulation configuration.

use crate::core::constants::TICK_INTERVAL_MS;
use std::path::PathBuf;

/// Where the simulation's randomness comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiceMode {
    /// Fresh entropy every run
    Entropy,
    /// ChaCha8 seeded with the given value
    Seeded(u64),
    /// The fixed linear-congruential stream; identical on every run
    Deterministic,
}

/// Configuration for a batch run of one character.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Stop once the character reaches this level
    pub max_level: u32,

    /// Milliseconds of game time per tick
    pub tick_ms: u64,

    /// Safety cap on ticks before giving up
    pub max_ticks: u64,

    pub dice: DiceMode,

    /// Roster file to load the character from and save it back to
    /// (None = fresh character, nothing saved)
    pub roster_path: Option<PathBuf>,

    /// Character to pick from the roster (None = the first one)
    pub player_name: Option<String>,

    /// Log verbosity (0 = silent, 1 = character sheet per level, 2 = every task)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_level: 10,
            tick_ms: TICK_INTERVAL_MS,
            max_ticks: 100_000_000,
            dice: DiceMode::Entropy,
            roster_path: None,
            player_name: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Reproducible run on the linear-congruential dice.
    pub fn deterministic(max_level: u32) -> Self {
        Self {
            max_level,
            dice: DiceMode::Deterministic,
            verbosity: 0,
            ..Default::default()
        }
    }

    /// Reproducible run on seeded ChaCha dice.
    pub fn seeded(seed: u64, max_level: u32) -> Self {
        Self {
            max_level,
            dice: DiceMode::Seeded(seed),
            verbosity: 0,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_standard_tick() {
        let config = SimConfig::default();
        assert_eq!(config.tick_ms, 100);
        assert_eq!(config.dice, DiceMode::Entropy);
        assert!(config.roster_path.is_none());
    }

    #[test]
    fn test_presets_are_quiet() {
        assert_eq!(SimConfig::deterministic(5).verbosity, 0);
        assert_eq!(SimConfig::seeded(1, 5).dice, DiceMode::Seeded(1));
    }
}
