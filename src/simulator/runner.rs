//! Batch runner: drives one character to a target level as fast as the
//! machine allows.

use super::config::{DiceMode, SimConfig};
use super::report::{character_sheet, LevelMark, SimReport};
use crate::character::creation::random_player;
use crate::character::player::Player;
use crate::core::dice::{Dice, LcgDice, RngDice};
use crate::core::tick::Simulation;
use crate::roster::{Roster, RosterError, RosterStore};
use std::time::Instant;

/// Runs the configured simulation, loading and saving the roster when a
/// roster path is set.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, RosterError> {
    let mut store = config.roster_path.clone().map(RosterStore::at);
    let mut roster = match &store {
        Some(store) => store.load()?,
        None => Roster::new(),
    };

    let existing = match &config.player_name {
        Some(name) => roster.find_by_name(name).cloned(),
        None => roster.players.first().cloned(),
    };

    let (player, report) = match config.dice {
        DiceMode::Entropy => run_with_dice(existing, RngDice::from_entropy(), config),
        DiceMode::Seeded(seed) => run_with_dice(existing, RngDice::seeded(seed), config),
        DiceMode::Deterministic => run_with_dice(existing, LcgDice::new(), config),
    };

    if let Some(store) = store.as_mut() {
        match roster.find_mut(player.id) {
            Some(slot) => *slot = player,
            None => roster.add_player(player),
        }
        store.save(&roster)?;
        log::info!("Roster saved to {}", store.path().display());
    }

    Ok(report)
}

fn run_with_dice<D: Dice>(
    existing: Option<Player>,
    mut dice: D,
    config: &SimConfig,
) -> (Player, SimReport) {
    let player = existing.unwrap_or_else(|| random_player(&mut dice));
    let mut sim = Simulation::new(player, dice);
    let report = simulate_player(&mut sim, config);
    (sim.into_player(), report)
}

/// Ticks `sim` until the target level or the tick cap.
pub fn simulate_player<D: Dice>(sim: &mut Simulation<D>, config: &SimConfig) -> SimReport {
    let started = Instant::now();
    let mut ticks = 0u64;
    let mut kills = 0u64;
    let mut quests_completed = 0u64;
    let mut acts_completed = 0u64;
    let mut levels = Vec::new();

    if config.verbosity >= 1 {
        println!("{}", character_sheet(sim.player()));
    }

    while sim.player().level < config.max_level && ticks < config.max_ticks {
        let result = sim.tick(config.tick_ms);
        ticks += 1;
        kills += result.kills as u64;
        quests_completed += result.quests_completed as u64;
        acts_completed += result.acts_completed as u64;

        if config.verbosity >= 2 && result.task_completed {
            if let Some(task) = &sim.player().task {
                println!("  [{}] {}", ticks, task.description);
            }
        }

        if result.levels_gained > 0 {
            levels.push(LevelMark {
                level: sim.player().level,
                tick: ticks,
                virtual_ms: ticks * config.tick_ms,
            });
            if config.verbosity >= 1 {
                println!("{}", character_sheet(sim.player()));
            }
        }
    }

    let player = sim.player();
    SimReport {
        player: player.summary(),
        final_level: player.level,
        act: player.quest_book.act(),
        ticks,
        virtual_ms: ticks * config.tick_ms,
        real_ms: started.elapsed().as_millis() as u64,
        kills,
        quests_completed,
        acts_completed,
        gold: player.inventory.gold(),
        reached_target: player.level >= config.max_level,
        levels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_runs_match() {
        let config = SimConfig::deterministic(3);
        let a = run_simulation(&config).unwrap();
        let b = run_simulation(&config).unwrap();

        assert!(a.reached_target);
        assert_eq!(a.final_level, 3);
        assert_eq!(a.ticks, b.ticks);
        assert_eq!(a.gold, b.gold);
        assert_eq!(a.player, b.player);
    }

    #[test]
    fn test_level_marks_are_increasing() {
        let report = run_simulation(&SimConfig::seeded(42, 4)).unwrap();
        assert_eq!(report.levels.len(), 3);
        for pair in report.levels.windows(2) {
            assert_eq!(pair[1].level, pair[0].level + 1);
            assert!(pair[1].tick > pair[0].tick);
        }
    }

    #[test]
    fn test_tick_cap_stops_run() {
        let config = SimConfig {
            max_ticks: 50,
            ..SimConfig::seeded(1, 99)
        };
        let report = run_simulation(&config).unwrap();
        assert_eq!(report.ticks, 50);
        assert!(!report.reached_target);
    }
}
