use crate::content::monsters::MonsterRef;
use crate::core::constants::MS_PER_SECOND;
use serde::{Deserialize, Serialize};

/// What a task pays out when it finishes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaskKind {
    /// A fight. `None` for NPC encounters and scaled-away monsters.
    Kill { monster: Option<MonsterRef> },
    Buy,
    HeadingToMarket,
    Sell,
    HeadingToKillingFields,
    Regular,
    /// Narrative task that advances the act when it completes.
    Plot,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub kind: TaskKind,
    pub description: String,
    pub duration_ms: u64,
}

impl Task {
    pub fn new(kind: TaskKind, description: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            kind,
            description: description.into(),
            duration_ms,
        }
    }

    pub fn kill(
        monster: Option<MonsterRef>,
        description: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        Self::new(TaskKind::Kill { monster }, description, duration_ms)
    }

    pub fn regular(description: impl Into<String>, seconds: u64) -> Self {
        Self::new(TaskKind::Regular, description, seconds * MS_PER_SECOND)
    }

    pub fn plot(description: impl Into<String>, seconds: u64) -> Self {
        Self::new(TaskKind::Plot, description, seconds * MS_PER_SECOND)
    }

    pub fn is_kill(&self) -> bool {
        matches!(self.kind, TaskKind::Kill { .. })
    }

    /// Fighting, or on the way to a fight. Shopping is skipped after these.
    pub fn is_combat_related(&self) -> bool {
        matches!(
            self.kind,
            TaskKind::Kill { .. } | TaskKind::HeadingToKillingFields
        )
    }

    pub fn monster(&self) -> Option<MonsterRef> {
        match self.kind {
            TaskKind::Kill { monster } => monster,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_and_plot_durations_in_ms() {
        assert_eq!(Task::regular("Waiting", 4).duration_ms, 4000);
        assert_eq!(Task::plot("Loading Act I", 2).duration_ms, 2000);
        assert_eq!(Task::plot("x", 1).kind, TaskKind::Plot);
    }

    #[test]
    fn test_combat_related() {
        let kill = Task::kill(Some(MonsterRef(0)), "Executing a thing", 1000);
        assert!(kill.is_kill());
        assert!(kill.is_combat_related());
        assert_eq!(kill.monster(), Some(MonsterRef(0)));

        let walk = Task::new(TaskKind::HeadingToKillingFields, "Heading", 4000);
        assert!(!walk.is_kill());
        assert!(walk.is_combat_related());

        let buy = Task::new(TaskKind::Buy, "Negotiating", 5000);
        assert!(!buy.is_combat_related());
        assert_eq!(buy.monster(), None);
    }
}
