//! Per-frame driving interface shared by the simulation and its drivers.

/// What happened during one tick.
///
/// Drivers use this to decide when to redraw or report without subscribing
/// to individual signals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    /// The active task finished and the dequeue loop ran
    pub task_completed: bool,
    /// Kill tasks finished
    pub kills: u32,
    /// Levels gained
    pub levels_gained: u32,
    /// Quests completed (the first quest of an act is only started)
    pub quests_completed: u32,
    /// Acts completed
    pub acts_completed: u32,
}

impl TickResult {
    /// Folds another result into this one, for drivers that batch ticks.
    pub fn merge(&mut self, other: TickResult) {
        self.task_completed |= other.task_completed;
        self.kills += other.kills;
        self.levels_gained += other.levels_gained;
        self.quests_completed += other.quests_completed;
        self.acts_completed += other.acts_completed;
    }
}

/// Anything advanced by elapsed wall-clock time.
pub trait Tickable {
    /// Advance by `elapsed_ms` milliseconds. Returns what happened.
    fn tick(&mut self, elapsed_ms: u64) -> TickResult;
}

/// Calls `tick(step_ms)` `ticks` times and merges the results.
pub fn run_ticks(target: &mut impl Tickable, ticks: u64, step_ms: u64) -> TickResult {
    let mut total = TickResult::default();
    for _ in 0..ticks {
        total.merge(target.tick(step_ms));
    }
    total
}
