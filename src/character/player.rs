//! The character sheet and every reward a character can win.

use super::equipment::Equipment;
use super::inventory::Inventory;
use super::quest_book::QuestBook;
use super::spell_book::SpellBook;
use super::stats::{StatType, Stats};
use crate::content::items::SPELLS;
use crate::core::bar::Bar;
use crate::core::constants::{level_up_time, BASE_CARRY_CAPACITY};
use crate::core::dice::Dice;
use crate::core::signal::Signal;
use crate::core::task::Task;
use crate::rewards::equipment::random_equipment;
use crate::rewards::items::special_item;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    NewTask { description: String, duration_ms: u64 },
    LevelUp { level: u32 },
    /// Sent last by [`Player::resync`] so observers can redraw once.
    Resync,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    /// Unix timestamp (seconds) of creation.
    pub birthday: i64,
    pub race: String,
    pub class: String,
    pub level: u32,
    pub stats: Stats,
    pub exp_bar: Bar,
    pub inventory: Inventory,
    pub equipment: Equipment,
    pub spell_book: SpellBook,
    pub quest_book: QuestBook,
    pub task_bar: Bar,
    pub task: Option<Task>,
    pub queue: VecDeque<Task>,
    #[serde(skip)]
    pub events: Signal<PlayerEvent>,
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.birthday == other.birthday
            && self.race == other.race
            && self.class == other.class
            && self.level == other.level
            && self.stats == other.stats
            && self.exp_bar == other.exp_bar
            && self.inventory == other.inventory
            && self.equipment == other.equipment
            && self.spell_book == other.spell_book
            && self.quest_book == other.quest_book
            && self.task_bar == other.task_bar
            && self.task == other.task
            && self.queue == other.queue
    }
}

impl Player {
    /// Bare level-1 character; see [`super::creation::create_player`] for the
    /// starting kit.
    pub fn new(name: &str, race: &str, class: &str, stats: Stats, birthday: i64) -> Self {
        let capacity = BASE_CARRY_CAPACITY + stats.get(StatType::Strength);
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            birthday,
            race: race.to_string(),
            class: class.to_string(),
            level: 1,
            stats,
            exp_bar: Bar::new(level_up_time(1)),
            inventory: Inventory::new(capacity),
            equipment: Equipment::new(),
            spell_book: SpellBook::new(),
            quest_book: QuestBook::new(),
            task_bar: Bar::default(),
            task: None,
            queue: VecDeque::new(),
            events: Signal::new(),
        }
    }

    pub fn level_up(&mut self, dice: &mut impl Dice) {
        self.level += 1;
        let hp = self.stats.get(StatType::Condition) / 3 + 1 + dice.below(4) as u32;
        let mp = self.stats.get(StatType::Intelligence) / 3 + 1 + dice.below(4) as u32;
        self.stats.increment(StatType::HpMax, hp);
        self.stats.increment(StatType::MpMax, mp);
        self.win_stat(dice);
        self.win_stat(dice);
        self.win_spell(dice);
        self.exp_bar.reset(level_up_time(self.level), 0.0);
        log::debug!("{} reached level {}", self.name, self.level);
        let event = PlayerEvent::LevelUp { level: self.level };
        self.events.emit(&event);
    }

    /// Raises one stat by a point. Half the time the stat is uniform;
    /// otherwise it is weighted by the square of its current value, so strong
    /// stats keep getting stronger.
    pub fn win_stat(&mut self, dice: &mut impl Dice) -> StatType {
        let total = self.stats.sum_of_squares();
        let stat = if dice.odds(1, 2) || total == 0 {
            *dice.pick(&StatType::all())
        } else {
            let mut t = dice.below(total);
            let mut chosen = StatType::MpMax;
            for (stat, value) in self.stats.iter() {
                let weight = value as u64 * value as u64;
                if t < weight {
                    chosen = stat;
                    break;
                }
                t -= weight;
            }
            chosen
        };
        self.stats.increment(stat, 1);
        if stat == StatType::Strength {
            let capacity = BASE_CARRY_CAPACITY + self.stats.get(StatType::Strength);
            self.inventory.set_capacity(capacity);
        }
        stat
    }

    /// One more level in a spell; early spells are the likeliest.
    pub fn win_spell(&mut self, dice: &mut impl Dice) {
        let known = self.stats.get(StatType::Wisdom) as usize + self.level as usize;
        let pool = known.clamp(1, SPELLS.len());
        let index = dice.below_low(pool as u64) as usize;
        self.spell_book.add(SPELLS[index], 1);
    }

    pub fn win_equipment(&mut self, dice: &mut impl Dice) {
        let (slot, name) = random_equipment(self.level, dice);
        self.equipment.put(slot, &name);
    }

    pub fn win_item(&mut self, dice: &mut impl Dice) {
        let item = special_item(dice);
        self.inventory.add(&item, 1);
    }

    /// Makes `task` current and restarts the task bar for its duration.
    pub fn set_task(&mut self, task: Task) {
        self.task_bar.reset(task.duration_ms as f64, 0.0);
        log::debug!("{}: {}", self.name, task.description);
        let event = PlayerEvent::NewTask {
            description: task.description.clone(),
            duration_ms: task.duration_ms,
        };
        self.task = Some(task);
        self.events.emit(&event);
    }

    /// "<Stat> <value>" of the strongest prime stat.
    pub fn best_stat(&self) -> String {
        let (stat, value) = self.stats.best_prime();
        format!("{} {}", stat.name(), value)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} the {}, level {} {}, {}",
            self.name,
            self.race,
            self.level,
            self.class,
            self.quest_book.act_name()
        )
    }

    /// Mutes or unmutes every signal on the sheet.
    pub fn set_muted(&mut self, muted: bool) {
        self.events.set_muted(muted);
        self.stats.change.set_muted(muted);
        self.exp_bar.change.set_muted(muted);
        self.inventory.set_muted(muted);
        self.equipment.change.set_muted(muted);
        self.spell_book.change.set_muted(muted);
        self.quest_book.set_muted(muted);
        self.task_bar.change.set_muted(muted);
    }

    /// Replays current state to every subscriber, e.g. after a muted burst.
    pub fn resync(&mut self) {
        self.stats.resync();
        self.exp_bar.resync();
        self.inventory.resync();
        self.equipment.resync();
        self.spell_book.resync();
        self.quest_book.resync();
        self.task_bar.resync();
        if let Some(task) = &self.task {
            let event = PlayerEvent::NewTask {
                description: task.description.clone(),
                duration_ms: task.duration_ms,
            };
            self.events.emit(&event);
        }
        self.events.emit(&PlayerEvent::Resync);
    }
}
