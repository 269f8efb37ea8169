//! Encounter generation and the named characters of the plot.

use super::equipment::closest_by_level;
use crate::content::classes::{CLASSES, RACES};
use crate::content::items::{IMPRESSIVE_TITLES, TITLES};
use crate::content::monsters::{MonsterRef, MONSTERS};
use crate::core::constants::{
    KILL_TIME_FACTOR, LEVEL_DRIFT_ODDS, MONSTER_SAMPLES, MS_PER_SECOND, NPC_ENCOUNTER_ODDS,
    QUEST_MONSTER_ODDS,
};
use crate::core::dice::Dice;
use crate::core::task::Task;
use crate::lingo::grammar::{big, indefinite, plural, sick, special, young};
use crate::lingo::names::generate_name;

/// Index of the monster whose level is nearest `level` out of `samples`
/// random draws.
pub(crate) fn closest_monster(level: i64, samples: usize, dice: &mut impl Dice) -> MonsterRef {
    let indices: Vec<usize> = (0..MONSTERS.len()).collect();
    let index = *closest_by_level(&indices, level, samples, |&i| MONSTERS[i].level, dice);
    MonsterRef(index)
}

/// Decorates `name` for a fight `gap` levels above (positive) or below
/// (negative) the chosen monster.
fn decorate(name: String, gap: i64, dice: &mut impl Dice) -> String {
    if gap <= -10 {
        format!("imaginary {}", name)
    } else if gap < -5 {
        let i = 10 + gap;
        let i = 5 - dice.below(i as u64 + 1) as i64;
        sick(i, &young(-gap - i, &name))
    } else if gap < 0 {
        if dice.below(2) == 1 {
            sick(gap, &name)
        } else {
            young(gap, &name)
        }
    } else if gap >= 10 {
        format!("messianic {}", name)
    } else if gap > 5 {
        let i = 10 - gap;
        let i = 5 - dice.below(i as u64 + 1) as i64;
        big(i, &special(gap - i, &name))
    } else if gap > 0 {
        if dice.below(2) == 1 {
            big(gap, &name)
        } else {
            special(gap, &name)
        }
    } else {
        name
    }
}

/// Picks the next fight for a character of `player_level`.
///
/// `quest_monster` is occasionally reused so quests about a monster
/// actually involve fighting it.
pub fn monster_task(
    player_level: u32,
    quest_monster: Option<MonsterRef>,
    dice: &mut impl Dice,
) -> Task {
    let mut level = player_level as i64;
    for _ in 0..player_level {
        if dice.odds(LEVEL_DRIFT_ODDS.0, LEVEL_DRIFT_ODDS.1) {
            level += dice.rand_sign();
        }
    }
    level = level.max(1);

    let mut definite = false;
    let mut monster = None;
    let name;
    let lev;

    if dice.odds(NPC_ENCOUNTER_ODDS.0, NPC_ENCOUNTER_ODDS.1) {
        let race = dice.pick(RACES).name;
        if dice.odds(1, 2) {
            name = format!("passing {} {}", race, dice.pick(CLASSES).name);
        } else {
            let title = dice.pick_low(TITLES);
            name = format!("{} {} the {}", title, generate_name(dice), race);
            definite = true;
        }
        lev = level;
    } else {
        let chosen = match quest_monster {
            Some(m) if dice.odds(QUEST_MONSTER_ODDS.0, QUEST_MONSTER_ODDS.1) => m,
            _ => closest_monster(level, MONSTER_SAMPLES, dice),
        };
        name = chosen.kind().name.to_string();
        lev = chosen.kind().level;
        monster = Some(chosen);
    }

    let mut qty: i64 = 1;
    if level - lev > 10 {
        let base = lev.max(1);
        qty = ((level + dice.below(base as u64) as i64) / base).max(1);
        level /= qty;
    }

    let name = decorate(name, level - lev, dice);
    let result_level = (level * qty).max(1);
    let description = if definite {
        name
    } else {
        indefinite(&name, qty as u64)
    };

    let duration_ms =
        KILL_TIME_FACTOR * result_level as u64 * MS_PER_SECOND / player_level.max(1) as u64;
    Task::kill(monster, format!("Executing {}", description), duration_ms)
}

/// "<generated name> the <monster>" with the monster close to `level`.
pub fn named_monster(level: i64, dice: &mut impl Dice) -> String {
    let monster = closest_monster(level, 5, dice);
    format!("{} the {}", generate_name(dice), monster.kind().name)
}

/// A grand personage for the city intrigue cinematic.
pub fn impressive_guy(dice: &mut impl Dice) -> String {
    let title = dice.pick(IMPRESSIVE_TITLES);
    if dice.below(2) == 1 {
        format!("the {} of the {}", title, plural(dice.pick(RACES).name))
    } else {
        format!("{} {} of {}", title, generate_name(dice), generate_name(dice))
    }
}
