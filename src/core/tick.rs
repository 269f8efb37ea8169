//! The tick engine: advances one character through time.
//!
//! Each [`Simulation::tick`] runs, in order: task progress, experience,
//! quest, plot, then the dequeue loop that pays out the finished task and
//! picks the next one. Only kill tasks move the experience, quest, and
//! plot bars.

use super::constants::{
    act_length, equip_price, BUY_SECONDS, INTRO_PLOT_SECONDS, INTRO_TASKS,
    KILLING_FIELDS_TRIP_SECONDS, LOADING_TASK_MS, MARKET_TRIP_SECONDS, MS_PER_SECOND,
    PROLOGUE_PLOT_MAX, QUEST_BASE_LENGTH, QUEST_LENGTH_SPREAD, SELL_SECONDS,
};
use super::dice::{Dice, RngDice};
use super::game_loop::{TickResult, Tickable};
use super::task::{Task, TaskKind};
use crate::character::player::Player;
use crate::content::monsters::MonsterRef;
use crate::lingo::grammar::indefinite;
use crate::lingo::numerals::act_name;
use crate::rewards::cinematics::interplot_cinematic;
use crate::rewards::monsters::monster_task;
use crate::rewards::quests::next_quest;

/// Owns one character and the dice that drive it.
#[derive(Debug)]
pub struct Simulation<D: Dice = RngDice> {
    player: Player,
    dice: D,
}

impl<D: Dice> Simulation<D> {
    pub fn new(player: Player, dice: D) -> Self {
        Self { player, dice }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    pub fn into_player(self) -> Player {
        self.player
    }

    pub fn tick(&mut self, elapsed_ms: u64) -> TickResult {
        let mut result = TickResult::default();

        let task = match &self.player.task {
            Some(task) => task.clone(),
            None => {
                self.bootstrap();
                return result;
            }
        };

        if !self.player.task_bar.done() {
            self.player.task_bar.increment(elapsed_ms as f64);
            return result;
        }
        result.task_completed = true;

        if task.is_kill() {
            result.kills += 1;
            let seconds = task.duration_ms as f64 / MS_PER_SECOND as f64;

            if self.player.exp_bar.done() {
                self.player.level_up(&mut self.dice);
                result.levels_gained += 1;
            } else {
                self.player.exp_bar.increment(seconds);
            }

            if self.player.quest_book.act() >= 1 {
                let book = &self.player.quest_book;
                if book.quest_bar.done() || book.current_quest().is_none() {
                    if self.complete_quest() {
                        result.quests_completed += 1;
                    }
                } else {
                    self.player.quest_book.quest_bar.increment(seconds);
                }
            }

            if self.player.quest_book.plot_bar.done() {
                self.start_interplot();
            } else {
                self.player.quest_book.plot_bar.increment(seconds);
            }
        }

        self.dequeue(&mut result);
        result
    }

    /// Runs `ticks` ticks with every signal muted, then resyncs observers
    /// once.
    pub fn burst(&mut self, ticks: u64, elapsed_ms: u64) -> TickResult {
        self.player.set_muted(true);
        let mut total = TickResult::default();
        for _ in 0..ticks {
            total.merge(self.tick(elapsed_ms));
        }
        self.player.set_muted(false);
        self.player.resync();
        total
    }

    /// Installs the prologue: a loading task, the four intro scenes, and
    /// the plot task that opens act I.
    fn bootstrap(&mut self) {
        let player = &mut self.player;
        player.set_task(Task::new(TaskKind::Regular, "Loading", LOADING_TASK_MS));
        for (description, seconds) in INTRO_TASKS {
            player.queue.push_back(Task::regular(description, seconds));
        }
        player
            .queue
            .push_back(Task::plot(format!("Loading {}", act_name(1)), INTRO_PLOT_SECONDS));
        player.quest_book.plot_bar.reset(PROLOGUE_PLOT_MAX, 0.0);
    }

    /// Rolls the next quest, paying out for the previous one if there was
    /// one. Returns whether a quest was completed.
    fn complete_quest(&mut self) -> bool {
        let length = QUEST_BASE_LENGTH + self.dice.below_low(QUEST_LENGTH_SPREAD);
        self.player.quest_book.quest_bar.reset(length as f64, 0.0);

        let finished = self.player.quest_book.current_quest().map(str::to_string);
        if let Some(caption) = &finished {
            match self.dice.below(4) {
                0 => self.player.win_spell(&mut self.dice),
                1 => self.player.win_equipment(&mut self.dice),
                2 => {
                    self.player.win_stat(&mut self.dice);
                }
                3 => self.player.win_item(&mut self.dice),
                other => unreachable!("below(4) returned {}", other),
            }
            log::info!("{} completed quest: {}", self.player.name, caption);
        }

        let quest = next_quest(self.player.level, &mut self.dice);
        self.player.quest_book.monster = quest.monster;
        self.player.quest_book.start_quest(quest.caption);
        finished.is_some()
    }

    fn start_interplot(&mut self) {
        let act = self.player.quest_book.act();
        let tasks = interplot_cinematic(act, self.player.level, &mut self.dice);
        self.player.queue.extend(tasks);
    }

    fn complete_act(&mut self, result: &mut TickResult) {
        let act = self.player.quest_book.advance_act();
        self.player.quest_book.plot_bar.reset(act_length(act), 0.0);
        if act > 1 {
            self.player.win_item(&mut self.dice);
            self.player.win_equipment(&mut self.dice);
        }
        result.acts_completed += 1;
        log::info!("{} begins {}", self.player.name, act_name(act));
    }

    fn kill_loot(&mut self, monster: Option<MonsterRef>) {
        match monster.map(MonsterRef::kind) {
            Some(kind) if !kind.drops_treasure() => {
                let part = format!("{} {}", kind.name, kind.loot).to_lowercase();
                self.player.inventory.add(&part, 1);
            }
            _ => self.player.win_item(&mut self.dice),
        }
    }

    /// Sells the oldest inventory entry. Items named "... of ..." fetch a
    /// random premium.
    fn sell_first(&mut self) {
        let level = self.player.level as u64;
        let Some(item) = self.player.inventory.pop_first() else {
            debug_assert!(false, "sell task with an empty inventory");
            return;
        };
        let mut amount = item.quantity * level;
        if item.name.contains(" of ") {
            amount *= (1 + self.dice.below_low(10)) * (1 + self.dice.below_low(level));
        }
        self.player.inventory.add_gold(amount);
    }

    /// Pays out the finished task and picks the next, repeating while the
    /// new task is already complete.
    fn dequeue(&mut self, result: &mut TickResult) {
        while self.player.task_bar.done() {
            let Some(finished) = self.player.task.clone() else {
                break;
            };

            match finished.kind {
                TaskKind::Kill { monster } => self.kill_loot(monster),
                TaskKind::Buy => {
                    let price = equip_price(self.player.level);
                    self.player.inventory.spend_gold(price);
                    self.player.win_equipment(&mut self.dice);
                }
                TaskKind::HeadingToMarket | TaskKind::Sell => {
                    if finished.kind == TaskKind::Sell {
                        self.sell_first();
                    }
                    if let Some(next) = self.player.inventory.items().first() {
                        let description =
                            format!("Selling {}", indefinite(&next.name, next.quantity));
                        let task =
                            Task::new(TaskKind::Sell, description, SELL_SECONDS * MS_PER_SECOND);
                        self.player.set_task(task);
                        continue;
                    }
                }
                TaskKind::Plot => self.complete_act(result),
                TaskKind::HeadingToKillingFields | TaskKind::Regular => {}
            }

            let next = self.next_task(&finished);
            self.player.set_task(next);
        }
    }

    fn next_task(&mut self, previous: &Task) -> Task {
        let player = &mut self.player;
        if let Some(task) = player.queue.pop_front() {
            return task;
        }
        if player.inventory.is_overloaded() {
            return Task::new(
                TaskKind::HeadingToMarket,
                "Heading to market to sell loot",
                MARKET_TRIP_SECONDS * MS_PER_SECOND,
            );
        }
        if !previous.is_combat_related() {
            return if player.inventory.gold() > equip_price(player.level) {
                Task::new(
                    TaskKind::Buy,
                    "Negotiating purchase of better equipment",
                    BUY_SECONDS * MS_PER_SECOND,
                )
            } else {
                Task::new(
                    TaskKind::HeadingToKillingFields,
                    "Heading to the killing fields",
                    KILLING_FIELDS_TRIP_SECONDS * MS_PER_SECOND,
                )
            };
        }
        monster_task(player.level, player.quest_book.monster, &mut self.dice)
    }
}

impl Simulation<RngDice> {
    /// Entropy-seeded simulation for interactive play.
    pub fn with_entropy(player: Player) -> Self {
        Self::new(player, RngDice::from_entropy())
    }
}

impl<D: Dice> Tickable for Simulation<D> {
    fn tick(&mut self, elapsed_ms: u64) -> TickResult {
        Simulation::tick(self, elapsed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::stats::{StatType, Stats};
    use crate::core::dice::LcgDice;
    use rand_chacha::ChaCha8Rng;

    fn fresh_player() -> Player {
        let mut stats = Stats::new();
        for stat in StatType::prime() {
            stats.set(stat, 10);
        }
        Player::new("Tester", "Half Orc", "Robot Monk", stats, 0)
    }

    fn seeded(player: Player) -> Simulation<RngDice<ChaCha8Rng>> {
        Simulation::new(player, RngDice::seeded(42))
    }

    #[test]
    fn test_first_tick_only_bootstraps() {
        let mut sim = seeded(fresh_player());
        let result = sim.tick(100);

        let player = sim.player();
        let task = player.task.as_ref().unwrap();
        assert_eq!(task.description, "Loading");
        assert_eq!(task.kind, TaskKind::Regular);
        assert_eq!(player.task_bar.max(), 2000.0);
        assert_eq!(player.task_bar.position(), 0.0);
        assert_eq!(player.quest_book.plot_bar.max(), 28.0);
        assert_eq!(player.queue.len(), 5);
        assert_eq!(player.queue.back().unwrap().kind, TaskKind::Plot);
        assert_eq!(result, TickResult::default());
    }

    #[test]
    fn test_intro_tasks_play_in_order() {
        let mut sim = seeded(fresh_player());
        sim.tick(100);
        // Loading runs 2000 ms; the tick after it fills completes it.
        for _ in 0..20 {
            sim.tick(100);
        }
        assert_eq!(sim.player().task.as_ref().unwrap().description, "Loading");
        let result = sim.tick(100);
        assert!(result.task_completed);
        assert_eq!(
            sim.player().task.as_ref().unwrap().description,
            INTRO_TASKS[0].0
        );
    }

    #[test]
    fn test_prologue_leads_to_act_one() {
        let mut sim = seeded(fresh_player());
        let mut acts = 0;
        for _ in 0..400 {
            acts += sim.tick(100).acts_completed;
        }
        assert_eq!(acts, 1);
        let book = &sim.player().quest_book;
        assert_eq!(book.act(), 1);
        assert_eq!(book.plot_bar.max(), act_length(1));
        // act I grants no bonus loot
        assert!(sim.player().inventory.is_empty());
    }

    #[test]
    fn test_sell_task_pays_quantity_times_level() {
        let mut player = fresh_player();
        player.level = 3;
        player.inventory.add("Gold Ring", 5);
        player.set_task(Task::new(TaskKind::Sell, "Selling 5 Gold Rings", 1000));
        let mut sim = seeded(player);

        for _ in 0..10 {
            sim.tick(100);
        }
        let result = sim.tick(100);

        assert!(result.task_completed);
        let player = sim.player();
        assert_eq!(player.inventory.gold(), 15);
        assert!(player.inventory.is_empty());
        assert_eq!(
            player.task.as_ref().unwrap().kind,
            TaskKind::HeadingToKillingFields
        );
    }

    #[test]
    fn test_market_trip_sells_everything() {
        let mut player = fresh_player();
        player.inventory.add("rat tail", 2);
        player.inventory.add("bat wing", 1);
        player.set_task(Task::new(TaskKind::HeadingToMarket, "Heading to market", 0));
        let mut sim = seeded(player);

        let mut guard = 0;
        while !sim.player().inventory.is_empty() && guard < 100 {
            sim.tick(1000);
            guard += 1;
        }
        assert_eq!(sim.player().inventory.gold(), 3);
    }

    #[test]
    fn test_buy_spends_equip_price() {
        let mut player = fresh_player();
        player.inventory.add_gold(100);
        player.set_task(Task::new(TaskKind::Buy, "Negotiating", 0));
        let mut sim = seeded(player);

        sim.tick(100);

        assert_eq!(sim.player().inventory.gold(), 100 - equip_price(1));
    }

    #[test]
    fn test_shopping_when_rich_after_non_combat_task() {
        let mut player = fresh_player();
        player.inventory.add_gold(1000);
        player.set_task(Task::regular("Resting", 0));
        let mut sim = seeded(player);

        sim.tick(100);

        assert_eq!(sim.player().task.as_ref().unwrap().kind, TaskKind::Buy);
    }

    #[test]
    fn test_kill_follows_combat_related_task() {
        let mut player = fresh_player();
        player.inventory.add_gold(1000);
        player.set_task(Task::new(
            TaskKind::HeadingToKillingFields,
            "Heading to the killing fields",
            0,
        ));
        let mut sim = seeded(player);

        sim.tick(100);

        assert!(sim.player().task.as_ref().unwrap().is_kill());
    }

    #[test]
    fn test_overloaded_goes_to_market() {
        let mut player = fresh_player();
        player.inventory.add("rock", 100);
        player.set_task(Task::regular("Resting", 0));
        let mut sim = seeded(player);

        sim.tick(100);

        assert_eq!(
            sim.player().task.as_ref().unwrap().kind,
            TaskKind::HeadingToMarket
        );
    }

    #[test]
    fn test_kill_grants_experience_and_loot() {
        let mut player = fresh_player();
        player.set_task(Task::kill(Some(MonsterRef(1)), "Executing an Ant", 3000));
        let mut sim = seeded(player);

        for _ in 0..31 {
            sim.tick(100);
        }

        let player = sim.player();
        assert_eq!(player.exp_bar.position(), 3.0);
        assert_eq!(player.inventory.quantity("ant antenna"), 1);
        assert_eq!(player.quest_book.plot_bar.position(), 3.0);
        // no quests before act I
        assert_eq!(player.quest_book.current_quest(), None);
    }

    #[test]
    fn test_treasure_monster_drops_special_item() {
        let mut player = fresh_player();
        player.set_task(Task::kill(Some(MonsterRef(59)), "Executing a Black Dragon", 0));
        let mut sim = seeded(player);

        sim.tick(100);

        let items = sim.player().inventory.items();
        assert_eq!(items.len(), 1);
        assert!(items[0].name.contains(" of "));
    }

    #[test]
    fn test_full_experience_bar_levels_up() {
        let mut player = fresh_player();
        let max = player.exp_bar.max();
        player.exp_bar.reposition(max);
        player.set_task(Task::kill(Some(MonsterRef(1)), "Executing an Ant", 0));
        let mut sim = seeded(player);

        let result = sim.tick(100);

        assert_eq!(result.levels_gained, 1);
        assert_eq!(sim.player().level, 2);
    }

    #[test]
    fn test_first_kill_in_act_starts_quest_without_reward() {
        let mut player = fresh_player();
        player.quest_book.advance_act();
        player.set_task(Task::kill(Some(MonsterRef(1)), "Executing an Ant", 0));
        let mut sim = seeded(player);

        let result = sim.tick(100);

        assert_eq!(result.quests_completed, 0);
        let book = &sim.player().quest_book;
        assert!(book.current_quest().is_some());
        assert!(book.quest_bar.max() >= 50.0);
    }

    /// Spell levels, equipped slots, stat points, and special items held.
    fn reward_tally(player: &Player) -> [u64; 4] {
        let spells = player.spell_book.spells().iter().map(|s| s.level as u64).sum();
        let slots = player.equipment.iter().filter(|(_, item)| item.is_some()).count() as u64;
        let stats = player.stats.iter().map(|(_, v)| v as u64).sum();
        let specials = player
            .inventory
            .items()
            .iter()
            .filter(|item| item.name.contains(" of "))
            .count() as u64;
        [spells, slots, stats, specials]
    }

    #[test]
    fn test_finished_quest_pays_one_reward_and_starts_another() {
        for seed in 0..20 {
            let mut player = fresh_player();
            player.quest_book.advance_act();
            player.quest_book.start_quest("Fetch me a turnip".to_string());
            let max = player.quest_book.quest_bar.max();
            player.quest_book.quest_bar.reposition(max);
            player.set_task(Task::kill(Some(MonsterRef(1)), "Executing an Ant", 0));
            let before = reward_tally(&player);
            let mut sim = Simulation::new(player, RngDice::seeded(seed));

            let result = sim.tick(100);

            assert_eq!(result.quests_completed, 1);
            let after = reward_tally(sim.player());
            let gained: u64 = after.iter().zip(before.iter()).map(|(a, b)| a - b).sum();
            assert_eq!(gained, 1, "seed {} gained {:?} -> {:?}", seed, before, after);

            let book = &sim.player().quest_book;
            assert_eq!(book.quests().count(), 2);
            assert_ne!(book.current_quest(), Some("Fetch me a turnip"));
            assert!(book.quest_bar.max() >= 50.0);
            assert_eq!(book.quest_bar.position(), 0.0);
        }
    }

    #[test]
    fn test_completing_later_act_pays_item_and_equipment() {
        let mut player = fresh_player();
        player.quest_book.advance_act();
        player.set_task(Task::plot("Loading Act II", 0));
        let mut sim = seeded(player);

        let result = sim.tick(100);

        assert_eq!(result.acts_completed, 1);
        let player = sim.player();
        assert_eq!(player.quest_book.act(), 2);
        assert_eq!(player.quest_book.plot_bar.max(), act_length(2));
        assert_eq!(player.quest_book.plot_bar.position(), 0.0);

        let items = player.inventory.items();
        assert_eq!(items.len(), 1);
        assert!(items[0].name.contains(" of "));
        let equipped: Vec<_> = player.equipment.iter().filter_map(|(_, item)| item).collect();
        assert_eq!(equipped.len(), 1);
        assert!(player.equipment.best.starts_with(equipped[0]));
    }

    #[test]
    fn test_done_plot_bar_queues_cinematic() {
        let mut player = fresh_player();
        player.quest_book.plot_bar.reposition(PROLOGUE_PLOT_MAX);
        player.set_task(Task::kill(Some(MonsterRef(1)), "Executing an Ant", 0));
        let mut sim = seeded(player);

        sim.tick(100);

        let player = sim.player();
        assert_eq!(player.task.as_ref().unwrap().kind, TaskKind::Regular);
        assert_eq!(player.queue.back().unwrap().kind, TaskKind::Plot);
    }

    #[test]
    fn test_burst_mutes_then_resyncs() {
        use crate::character::player::PlayerEvent;
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut sim = seeded(fresh_player());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        sim.player_mut()
            .events
            .connect(move |e| s.borrow_mut().push(e.clone()));

        let result = sim.burst(500, 100);

        assert!(result.task_completed);
        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1], PlayerEvent::Resync);
    }

    #[test]
    fn test_lcg_runs_are_identical() {
        let mut a = Simulation::new(fresh_player(), LcgDice::new());
        let mut b = Simulation::new(fresh_player(), LcgDice::new());
        for _ in 0..5000 {
            a.tick(100);
            b.tick(100);
        }
        assert_eq!(a.player().level, b.player().level);
        assert_eq!(a.player().inventory.gold(), b.player().inventory.gold());
        assert_eq!(a.player().task, b.player().task);
    }
}
