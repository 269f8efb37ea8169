use crate::core::dice::Dice;
use crate::core::signal::Signal;
use serde::{Deserialize, Serialize};

pub const NUM_STATS: usize = 8;
pub const NUM_PRIME_STATS: usize = 6;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StatType {
    Strength,
    Condition,
    Dexterity,
    Intelligence,
    Wisdom,
    Charisma,
    HpMax,
    MpMax,
}

impl StatType {
    pub fn all() -> [StatType; NUM_STATS] {
        [
            StatType::Strength,
            StatType::Condition,
            StatType::Dexterity,
            StatType::Intelligence,
            StatType::Wisdom,
            StatType::Charisma,
            StatType::HpMax,
            StatType::MpMax,
        ]
    }

    /// The rollable stats; hit and mana points are derived from these.
    pub fn prime() -> [StatType; NUM_PRIME_STATS] {
        [
            StatType::Strength,
            StatType::Condition,
            StatType::Dexterity,
            StatType::Intelligence,
            StatType::Wisdom,
            StatType::Charisma,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatType::Strength => "STR",
            StatType::Condition => "CON",
            StatType::Dexterity => "DEX",
            StatType::Intelligence => "INT",
            StatType::Wisdom => "WIS",
            StatType::Charisma => "CHA",
            StatType::HpMax => "HP Max",
            StatType::MpMax => "MP Max",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            StatType::Strength => 0,
            StatType::Condition => 1,
            StatType::Dexterity => 2,
            StatType::Intelligence => 3,
            StatType::Wisdom => 4,
            StatType::Charisma => 5,
            StatType::HpMax => 6,
            StatType::MpMax => 7,
        }
    }
}

/// Emitted after a stat changes, carrying its new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatChange {
    pub stat: StatType,
    pub value: u32,
}

/// Full stat block; every [`StatType`] always has a value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stats {
    values: [u32; NUM_STATS],
    #[serde(skip)]
    pub change: Signal<StatChange>,
}

impl PartialEq for Stats {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: StatType) -> u32 {
        self.values[stat.index()]
    }

    /// Direct assignment for character creation; does not notify.
    pub fn set(&mut self, stat: StatType, value: u32) {
        self.values[stat.index()] = value;
    }

    pub fn increment(&mut self, stat: StatType, amount: u32) {
        let slot = &mut self.values[stat.index()];
        *slot = slot.saturating_add(amount);
        let event = StatChange {
            stat,
            value: *slot,
        };
        self.change.emit(&event);
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatType, u32)> + '_ {
        StatType::all().into_iter().map(move |stat| (stat, self.get(stat)))
    }

    /// Highest prime stat, first one wins ties.
    pub fn best_prime(&self) -> (StatType, u32) {
        let mut best = (StatType::Strength, self.get(StatType::Strength));
        for stat in StatType::prime() {
            if self.get(stat) > best.1 {
                best = (stat, self.get(stat));
            }
        }
        best
    }

    pub fn sum_of_squares(&self) -> u64 {
        self.values.iter().map(|&v| v as u64 * v as u64).sum()
    }

    pub fn resync(&mut self) {
        for stat in StatType::all() {
            let event = StatChange {
                stat,
                value: self.get(stat),
            };
            self.change.emit(&event);
        }
    }
}

/// Rolls stat blocks for character creation and remembers earlier rolls.
#[derive(Debug, Clone, Default)]
pub struct StatsBuilder {
    history: Vec<Stats>,
}

impl StatsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 3d6 per prime stat; hit and mana points from condition and intelligence.
    pub fn roll(&mut self, dice: &mut impl Dice) -> Stats {
        let mut stats = Stats::new();
        for stat in StatType::prime() {
            let value = 3 + dice.below(6) + dice.below(6) + dice.below(6);
            stats.set(stat, value as u32);
        }
        let hp = dice.below(8) as u32 + stats.get(StatType::Condition) / 6;
        let mp = dice.below(8) as u32 + stats.get(StatType::Intelligence) / 6;
        stats.set(StatType::HpMax, hp);
        stats.set(StatType::MpMax, mp);
        self.history.push(stats.clone());
        stats
    }

    /// Discards the latest roll and returns the one before it.
    ///
    /// Returns `None` (and keeps history intact) when there is nothing to go
    /// back to.
    pub fn unroll(&mut self) -> Option<&Stats> {
        if self.history.len() < 2 {
            return None;
        }
        self.history.pop();
        self.history.last()
    }

    pub fn current(&self) -> Option<&Stats> {
        self.history.last()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
